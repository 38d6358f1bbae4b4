//! Error types for bulkrun

use thiserror::Error;

/// Result type alias for bulkrun
pub type Result<T> = std::result::Result<T, BulkError>;

/// Main error type for bulkrun
#[derive(Error, Debug)]
pub enum BulkError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Non-success HTTP status from the remote backend
    #[error("Remote error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    /// The backend answered but reported that it could not do the work
    #[error("Rejected by remote: {0}")]
    Rejected(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
