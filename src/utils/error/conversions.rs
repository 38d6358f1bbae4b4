//! Type conversions for BulkError

use super::types::BulkError;
use crate::core::batch::FailureReason;

impl BulkError {
    /// Classify a transport error by what went wrong rather than where
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BulkError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            BulkError::Network(err.to_string())
        } else if err.is_decode() || err.is_body() {
            BulkError::Internal(format!("Failed to read response body: {}", err))
        } else {
            BulkError::HttpClient(err)
        }
    }
}

// Every adapter error ends up as a per-item failure in the ledger
impl From<BulkError> for FailureReason {
    fn from(err: BulkError) -> Self {
        let code = err.code();
        let message = match err {
            BulkError::RateLimit(message) | BulkError::Rejected(message) => message,
            BulkError::Remote { message, .. } => message,
            other => other.to_string(),
        };
        FailureReason::with_code(message, code)
    }
}
