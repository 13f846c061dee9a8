//! Query enhancer with fallback policy
//!
//! `QueryEnhancer::enhance` is total: every failure (missing credential,
//! blank query, transport error, upstream status, undecodable payload)
//! resolves to `EnhancementResult::fallback`.

use tracing::{debug, info, warn};

use super::client::CompletionClient;
use super::decode::decode_enhancement;
use super::prompt::SYSTEM_PROMPT;
use super::types::EnhancementResult;
use crate::core::config::EnhancerConfig;
use crate::core::error::{Error, Result};

/// Whether the enhancer can reach the completion service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// No credential configured; every call returns the fallback
    MissingCredential,
}

/// Rewrites raw search queries through the completion service
#[derive(Clone)]
pub struct QueryEnhancer {
    client: Option<CompletionClient>,
}

impl QueryEnhancer {
    /// Build an enhancer, reading the credential named in `config`
    pub fn new(config: &EnhancerConfig) -> Self {
        Self::with_api_key(config, config.api_key())
    }

    /// Build an enhancer with an explicit credential
    pub fn with_api_key(config: &EnhancerConfig, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        let client = match api_key {
            Some(key) => Some(CompletionClient::new(config, key)),
            None => {
                warn!(
                    "{} not set; search query enhancement is disabled",
                    config.api_key_env
                );
                None
            }
        };

        Self { client }
    }

    /// Enhancer that never calls out
    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn availability(&self) -> Availability {
        if self.client.is_some() {
            Availability::Available
        } else {
            Availability::MissingCredential
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }

    /// Enhance a raw search query. Never fails.
    pub async fn enhance(&self, original_query: &str) -> EnhancementResult {
        match self.try_enhance(original_query).await {
            Ok(Some(result)) => result,
            Ok(None) => EnhancementResult::fallback(original_query),
            Err(e) => {
                log_failure(&e);
                EnhancementResult::fallback(original_query)
            }
        }
    }

    /// Run the enhancement, surfacing failures instead of falling back.
    /// `Ok(None)` means the call was skipped (no credential or blank query).
    pub async fn try_enhance(&self, original_query: &str) -> Result<Option<EnhancementResult>> {
        let Some(client) = &self.client else {
            debug!("Enhancement unavailable, skipping");
            return Ok(None);
        };

        if original_query.trim().is_empty() {
            debug!("Blank query, skipping enhancement");
            return Ok(None);
        }

        info!("Enhancing search query with {}: {}", client.model(), original_query);

        let content = client.complete(SYSTEM_PROMPT, original_query).await?;
        let result = decode_enhancement(&content, original_query)?;

        info!(
            enhancement_type = %result.enhancement_type,
            confidence = result.confidence_score,
            related = result.related_terms.len(),
            "Query enhanced: '{}'",
            result.enhanced_query
        );

        Ok(Some(result))
    }
}

fn log_failure(error: &Error) {
    match error {
        Error::UpstreamStatus { status, body } => {
            warn!("Enhancement request failed with status {}: {}", status, body);
        }
        Error::Decode { message, raw } => {
            warn!("Could not decode enhancement payload ({}): {}", message, raw);
        }
        Error::Envelope { message } => {
            warn!("Malformed completion response: {}", message);
        }
        other => {
            warn!("Query enhancement failed, using original: {}", other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::EnhancementType;

    #[tokio::test]
    async fn test_missing_credential_returns_fallback() {
        let enhancer = QueryEnhancer::with_api_key(&EnhancerConfig::default(), None);
        assert_eq!(enhancer.availability(), Availability::MissingCredential);

        let result = enhancer.enhance("why are ports backed up").await;
        assert_eq!(result, EnhancementResult::fallback("why are ports backed up"));
    }

    #[tokio::test]
    async fn test_blank_credential_is_missing() {
        let enhancer =
            QueryEnhancer::with_api_key(&EnhancerConfig::default(), Some("  ".to_string()));
        assert!(!enhancer.is_available());
    }

    #[tokio::test]
    async fn test_blank_query_skips_network() {
        // Unroutable endpoint: any request attempt would surface as an error
        let config = EnhancerConfig {
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ..EnhancerConfig::default()
        };
        let enhancer = QueryEnhancer::with_api_key(&config, Some("sk-test".to_string()));
        assert!(enhancer.is_available());

        assert!(enhancer.try_enhance("   ").await.unwrap().is_none());

        let result = enhancer.enhance("").await;
        assert_eq!(result.enhanced_query, "");
        assert_eq!(result.enhancement_type, EnhancementType::Standard);
        assert_eq!(result.confidence_score, 1.0);
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        let config = EnhancerConfig {
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            timeout_secs: 2,
            ..EnhancerConfig::default()
        };
        let enhancer = QueryEnhancer::with_api_key(&config, Some("sk-test".to_string()));

        assert!(matches!(
            enhancer.try_enhance("rail strike").await,
            Err(Error::Transport(_))
        ));
        assert_eq!(
            enhancer.enhance("rail strike").await,
            EnhancementResult::fallback("rail strike")
        );
    }
}
