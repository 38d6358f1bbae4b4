//! Helper functions for creating specific error types

use super::types::BulkError;

impl BulkError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn rate_limit<S: Into<String>>(message: S) -> Self {
        Self::RateLimit(message.into())
    }

    pub fn remote<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::Rejected(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> String {
        match self {
            Self::Config(_) | Self::Yaml(_) => "config".to_string(),
            Self::Validation(_) => "validation".to_string(),
            Self::Io(_) => "io".to_string(),
            Self::Serialization(_) => "malformed_response".to_string(),
            Self::HttpClient(_) | Self::Network(_) => "network".to_string(),
            Self::Timeout(_) => "timeout".to_string(),
            Self::RateLimit(_) => "rate_limited".to_string(),
            Self::Remote { status, .. } => format!("http_{}", status),
            Self::Rejected(_) => "remote_rejected".to_string(),
            Self::NotFound(_) => "not_found".to_string(),
            Self::Internal(_) => "internal".to_string(),
        }
    }

    /// Whether a later retry of the same item has a reasonable chance to succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) | Self::HttpClient(_) | Self::RateLimit(_) => true,
            Self::Remote { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
