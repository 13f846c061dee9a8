//! Chat-completions client for query enhancement
//!
//! Speaks the OpenAI-compatible `/chat/completions` wire format with a
//! bearer credential. One request per call, no retries.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::EnhancerConfig;
use crate::core::error::{Error, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the external completion service
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Option<Duration>,
}

impl CompletionClient {
    /// Create a client from configuration and a resolved credential
    pub fn new(config: &EnhancerConfig, api_key: String) -> Self {
        // Clones share one connection pool
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request body for a system + user conversation
    pub(crate) fn build_request<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        }
    }

    /// Send one completion request and return the first choice's text
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = self.build_request(system, user);

        debug!("Sending request to completion service (model={})", self.model);

        let mut req = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request);

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Completion service error: {} - {}", status, body);
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ChatResponse = serde_json::from_str(&body).map_err(|e| Error::Envelope {
            message: format!("{}: {}", e, body),
        })?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Envelope {
                message: format!("no message content in response: {}", body),
            })?;

        debug!("Received completion ({} chars)", content.len());
        Ok(content)
    }
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

/// A single message in the conversation
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response envelope
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let client = CompletionClient::new(&EnhancerConfig::default(), "sk-test".to_string());
        let request = client.build_request("be terse", "container shortage");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 300);
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be terse");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "container shortage");
    }

    #[test]
    fn test_envelope_without_content() {
        let envelope: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(envelope.choices[0].message.content.is_none());

        let empty: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(empty.choices.is_empty());
    }
}
