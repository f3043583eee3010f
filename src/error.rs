use thiserror::Error;

/// Errors raised while building a tool configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid SearxNG base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("timeout_secs must be greater than zero")]
    InvalidTimeout,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
