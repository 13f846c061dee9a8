//! Error types for newsroom-search

use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// newsroom-search error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("AI service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI service error: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Unexpected AI service envelope: {message}")]
    Envelope { message: String },

    #[error("Failed to decode enhancement payload: {message}")]
    Decode { message: String, raw: String },

    #[error("Data API error: {message}")]
    DataApi { message: String },

    #[error("Search error: {message}")]
    SearchError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
