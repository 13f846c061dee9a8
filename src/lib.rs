//! newsroom-search - AI-assisted search for the newsroom site
//!
//! Rewrites readers' search queries through a chat-completions service and
//! runs them against the site's data API. Enhancement is optional and total:
//! without a credential, or on any failure, the raw query is used unchanged.

pub mod cli;
pub mod core;
pub mod enhance;
pub mod output;
pub mod search;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use enhance::{EnhancementResult, EnhancementType, QueryEnhancer};
