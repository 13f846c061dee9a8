use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::enhance::EnhancementResult;

/// Article fields the search flow reads from the data API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "published_at", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// A hit plus the plan term that found it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub article: Article,
    pub matched_term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub enhancement: EnhancementResult,
    pub results: Vec<SearchHit>,
    pub elapsed_ms: f64,
}

/// Merge per-term hit lists in plan order, keeping the first hit per
/// article id, and truncate to `limit`.
pub fn merge_hits(batches: Vec<(String, Vec<Article>)>, limit: usize) -> Vec<SearchHit> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for (term, articles) in batches {
        for article in articles {
            if merged.len() >= limit {
                return merged;
            }
            if seen.insert(article.id) {
                merged.push(SearchHit {
                    article,
                    matched_term: term.clone(),
                });
            }
        }
    }

    merged
}
