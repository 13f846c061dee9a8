//! Article search driven by enhanced queries

pub mod data_api;
pub mod plan;
pub mod query;
pub mod results;

pub use data_api::DataApiClient;
pub use plan::SearchPlan;
pub use query::SearchQuery;
pub use results::{merge_hits, Article, SearchHit, SearchResponse};
