//! Configuration management

use crate::core::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub enhancer: EnhancerConfig,
    pub data_api: DataApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    /// Chat-completions endpoint
    pub api_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Environment variable holding the bearer credential
    pub api_key_env: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on completion length
    pub max_tokens: u32,
    /// Per-request deadline in seconds (0 = transport default)
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataApiConfig {
    /// Base URL of the REST data API
    pub base_url: String,
    /// Related terms searched alongside the enhanced query
    pub max_related_terms: usize,
    /// Default result limit
    pub default_limit: usize,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            temperature: 0.2,
            max_tokens: 300,
            timeout_secs: 10,
        }
    }
}

impl Default for DataApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            max_related_terms: 3,
            default_limit: 20,
        }
    }
}

impl EnhancerConfig {
    /// Read the credential named by `api_key_env`. Unset or blank means absent.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// Per-request deadline, if one is configured
    pub fn timeout(&self) -> Option<std::time::Duration> {
        (self.timeout_secs > 0).then(|| std::time::Duration::from_secs(self.timeout_secs))
    }

    /// Reject values that would make every enhancement request fail
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_url)?;

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::ConfigError {
                message: format!(
                    "enhancer.temperature must be within [0, 2], got {}",
                    self.temperature
                ),
            });
        }
        if self.max_tokens == 0 {
            return Err(Error::ConfigError {
                message: "enhancer.max_tokens must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl DataApiConfig {
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from default location. Sections are validated by
    /// the commands that use them.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::from_file(&config_path)?
        } else {
            Config::default()
        };

        if let Ok(url) = std::env::var("NEWSROOM_DATA_API_URL") {
            config.data_api.base_url = url;
        }

        Ok(config)
    }

    /// Parse a configuration file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.enhancer.validate()?;
        self.data_api.validate()
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = Self::newsroom_home()?;
        Ok(home.join("config.toml"))
    }

    /// Get the newsroom-search home directory
    pub fn newsroom_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("NEWSROOM_HOME") {
            return Ok(PathBuf::from(home));
        }

        ProjectDirs::from("dev", "newsroom", "newsroom-search")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| Error::ConfigError {
                message: "Could not determine newsroom-search home directory".to_string(),
            })
    }
}

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.enhancer.model, DEFAULT_MODEL);
        assert_eq!(config.enhancer.max_tokens, 300);
        assert!((config.enhancer.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[enhancer]\nmodel = \"gpt-4.1-nano\"\ntimeout_secs = 0").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.enhancer.model, "gpt-4.1-nano");
        assert_eq!(config.enhancer.api_url, DEFAULT_API_URL);
        assert!(config.enhancer.timeout().is_none());
        assert_eq!(config.data_api.max_related_terms, 3);
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut config = Config::default();
        config.data_api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::Url(_))));
    }

    #[test]
    fn test_bad_data_api_url_does_not_block_enhancer() {
        let mut config = Config::default();
        config.data_api.base_url = "::not-a-url::".to_string();
        assert!(config.enhancer.validate().is_ok());
        assert!(config.data_api.validate().is_err());
    }

    #[test]
    fn test_bad_temperature_rejected() {
        let mut config = Config::default();
        config.enhancer.temperature = 3.5;
        assert!(matches!(config.validate(), Err(Error::ConfigError { .. })));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = EnhancerConfig {
            api_key_env: "NEWSROOM_TEST_BLANK_KEY".to_string(),
            ..EnhancerConfig::default()
        };
        std::env::set_var("NEWSROOM_TEST_BLANK_KEY", "   ");
        assert!(config.api_key().is_none());
        std::env::remove_var("NEWSROOM_TEST_BLANK_KEY");
    }
}
