//! Search execution: enhance, plan, query the data API, merge

use futures::future::join_all;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::error::{Error, Result};
use crate::enhance::{EnhancementResult, QueryEnhancer};
use crate::search::data_api::DataApiClient;
use crate::search::plan::SearchPlan;
use crate::search::results::{merge_hits, SearchResponse};

/// A search query with options
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// The raw search text
    pub text: String,
    /// Maximum results to return
    pub limit: usize,
    /// Related terms to search alongside the enhanced query
    pub max_related: usize,
    /// Skip enhancement and search the raw text only
    pub direct: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: 20,
            max_related: 3,
            direct: false,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_related(mut self, max_related: usize) -> Self {
        self.max_related = max_related;
        self
    }

    pub fn with_direct(mut self, direct: bool) -> Self {
        self.direct = direct;
        self
    }

    /// Execute the search
    pub async fn execute(
        &self,
        enhancer: &QueryEnhancer,
        data_api: &DataApiClient,
    ) -> Result<SearchResponse> {
        let start = Instant::now();

        if self.text.trim().is_empty() {
            return Err(Error::SearchError {
                message: "Search query is empty".to_string(),
            });
        }

        let enhancement = if self.direct {
            EnhancementResult::fallback(&self.text)
        } else {
            enhancer.enhance(&self.text).await
        };

        let plan = SearchPlan::from_enhancement(&enhancement, self.max_related);
        debug!(?plan, "Search plan");

        let lookups = plan
            .terms()
            .map(|term| async move { (term, data_api.search_articles(term, self.limit).await) });
        let mut outcomes = join_all(lookups).await.into_iter();

        let mut batches = Vec::with_capacity(plan.related.len() + 1);

        // Primary term must succeed
        if let Some((term, outcome)) = outcomes.next() {
            batches.push((term.to_string(), outcome?));
        }

        for (term, outcome) in outcomes {
            match outcome {
                Ok(articles) => batches.push((term.to_string(), articles)),
                Err(e) => warn!("Related-term search for '{}' failed: {}", term, e),
            }
        }

        let results = merge_hits(batches, self.limit);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            results = results.len(),
            terms = plan.related.len() + 1,
            "Search for '{}' finished in {:.1}ms",
            self.text,
            elapsed_ms
        );

        Ok(SearchResponse {
            query: self.text.clone(),
            enhancement,
            results,
            elapsed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let query = SearchQuery::new("tariffs")
            .with_limit(5)
            .with_max_related(1)
            .with_direct(true);
        assert_eq!(query.text, "tariffs");
        assert_eq!(query.limit, 5);
        assert_eq!(query.max_related, 1);
        assert!(query.direct);
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let api = DataApiClient::with_base_url("http://127.0.0.1:9/api");
        let err = SearchQuery::new("  ")
            .execute(&QueryEnhancer::disabled(), &api)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SearchError { .. }));
    }
}
