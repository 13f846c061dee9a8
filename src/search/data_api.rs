//! Client for the site's REST data API (article search only)

use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::results::Article;
use crate::core::config::DataApiConfig;
use crate::core::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Article list as served by the data API: either a bare array or a
/// paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArticleList {
    Bare(Vec<Article>),
    Paged { data: Vec<Article> },
}

impl ArticleList {
    fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Bare(articles) | Self::Paged { data: articles } => articles,
        }
    }
}

#[derive(Clone)]
pub struct DataApiClient {
    client: Client,
    base_url: String,
}

impl DataApiClient {
    pub fn new(config: &DataApiConfig) -> Self {
        Self::with_base_url(&config.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base}/articles?search=<term>&limit=<n>`
    pub async fn search_articles(&self, term: &str, limit: usize) -> Result<Vec<Article>> {
        let url = format!("{}/articles", self.base_url);
        let limit = limit.to_string();
        debug!("Searching articles for '{}'", term);

        let response = self
            .client
            .get(&url)
            .query(&[("search", term), ("limit", limit.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to reach data API at {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::DataApi {
                message: format!("{} returned {} - {}", url, status, body),
            });
        }

        let list: ArticleList = response
            .json()
            .await
            .context("Failed to parse data API article list")?;

        Ok(list.into_articles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_list_shapes() {
        let bare: ArticleList = serde_json::from_str(r#"[{"id":1,"title":"a"}]"#).unwrap();
        assert_eq!(bare.into_articles().len(), 1);

        let paged: ArticleList =
            serde_json::from_str(r#"{"data":[{"id":1,"title":"a"},{"id":2,"title":"b"}],"total":2}"#)
                .unwrap();
        assert_eq!(paged.into_articles().len(), 2);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = DataApiClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }
}
