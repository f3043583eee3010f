// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod query;
pub mod results;
pub mod tool;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{BASE_URL_ENV, SearxConfig};
pub use error::ConfigError;
pub use fetchers::{FetchOutcome, Fetcher, HttpFetcher};
pub use query::{SearchRequest, SearchUrl, encode};
pub use results::{ResultSet, SearchResult, ToolOutput, ToolRecord};
pub use tool::{SearxTool, ToolDefinition};

use std::path::Path;

/// Builder that assembles a configuration and produces a ready-to-use tool.
///
/// Layers apply in a fixed order when the tool is built: defaults, then any
/// config file or string, then a non-empty `SEARXNG_BASE_URL`, then an
/// explicit `with_base_url`.
#[derive(Debug, Clone)]
pub struct Searx {
    config: SearxConfig,
    base_url: Option<String>,
}

impl Default for Searx {
    fn default() -> Self {
        Self::new()
    }
}

impl Searx {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self {
            config: SearxConfig::default(),
            base_url: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SearxConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = SearxConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ConfigError> {
        let config = SearxConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the SearxNG instance to query, overriding config and environment
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Set the overall request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Set the redirect limit
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Final configuration, reading `SEARXNG_BASE_URL` from the process environment
    pub fn config(&self) -> SearxConfig {
        self.resolve(std::env::var(BASE_URL_ENV).ok())
    }

    /// Final configuration given the value of `SEARXNG_BASE_URL`
    fn resolve(&self, env_base_url: Option<String>) -> SearxConfig {
        let mut config = self.config.clone().with_env_base_url(env_base_url);
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config
    }

    /// Validate the configuration and build the tool
    pub fn build(self) -> Result<SearxTool, ConfigError> {
        SearxTool::new(&self.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let searx = Searx::new()
            .with_base_url("http://localhost:8888")
            .with_timeout(5)
            .with_max_redirects(3);
        let config = searx.resolve(None);
        assert_eq!(config.base_url, "http://localhost:8888");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_redirects, 3);

        let tool = searx.build().unwrap();
        assert_eq!(tool.base_url(), "http://localhost:8888");
    }

    #[test]
    fn test_builder_from_config_str() {
        let searx = Searx::new()
            .with_config_str(r#"{"base_url": "https://search.example", "timeout_secs": 12}"#)
            .unwrap()
            .with_timeout(7);
        let config = searx.resolve(None);
        assert_eq!(config.base_url, "https://search.example");
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn test_env_applies_over_defaults() {
        let config = Searx::new().resolve(Some("http://env.example".to_string()));
        assert_eq!(config.base_url, "http://env.example");
    }

    #[test]
    fn test_env_applies_over_config_file() {
        let searx = Searx::new()
            .with_config_str(r#"{"base_url": "https://file.example", "timeout_secs": 12}"#)
            .unwrap();
        let config = searx.resolve(Some("http://env.example".to_string()));
        assert_eq!(config.base_url, "http://env.example");
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_explicit_base_url_beats_env() {
        let searx = Searx::new().with_base_url("http://explicit.example");
        let config = searx.resolve(Some("http://env.example".to_string()));
        assert_eq!(config.base_url, "http://explicit.example");

        // Order of calls does not matter; explicit still wins over a later config
        let searx = Searx::new()
            .with_base_url("http://explicit.example")
            .with_config_str(r#"{"base_url": "https://file.example"}"#)
            .unwrap();
        assert_eq!(searx.resolve(None).base_url, "http://explicit.example");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        for blank in ["", "   ", "\t\n"] {
            let config = Searx::new().resolve(Some(blank.to_string()));
            assert_eq!(config.base_url, "http://searx.lan", "env value {blank:?}");
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let err = Searx::new().with_base_url("searx").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
