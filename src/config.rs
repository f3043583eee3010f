use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable that overrides the SearxNG base URL
pub const BASE_URL_ENV: &str = "SEARXNG_BASE_URL";

/// Browser identification sent with every search request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

/// Configuration for the SearxNG search tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearxConfig {
    /// Scheme and host (optionally port) of the SearxNG instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall cap on a single search request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of redirects followed before giving up
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for base_url
fn default_base_url() -> String {
    "http://searx.lan".to_string()
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    30
}

/// Default value for max_redirects
fn default_max_redirects() -> usize {
    10
}

/// Default value for user_agent
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for SearxConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

impl SearxConfig {
    /// Create a configuration pointing at the given instance, other fields defaulted
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Defaults with the environment applied on top
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Override the base URL with `SEARXNG_BASE_URL` when it is set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_env_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    pub(crate) fn with_env_base_url(mut self, value: Option<String>) -> Self {
        if let Some(base_url) = value {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                ::log::debug!("Using {} from environment: {}", BASE_URL_ENV, base_url);
                self.base_url = base_url.to_string();
            }
        }
        self
    }

    /// Check that the base URL is an absolute http(s) URL and the timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let parsed = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme {other:?}"))),
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
