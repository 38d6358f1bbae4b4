//! HTTP adapter for backend functions

use super::kind::OperationKind;
use crate::config::RemoteConfig;
use crate::core::batch::{FailureReason, ItemDescriptor};
use crate::core::traits::RemoteOperation;
use crate::utils::error::{BulkError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Calls `POST {base_url}/functions/v1/{function}` once per item
///
/// The item is sent as the JSON body. Every failure mode (transport,
/// timeout, status, malformed body) comes back as a [`FailureReason`].
#[derive(Debug, Clone)]
pub struct HttpOperation {
    client: reqwest::Client,
    kind: OperationKind,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpOperation {
    /// Build an adapter for `kind` against the configured backend
    pub fn new(kind: OperationKind, config: &RemoteConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(BulkError::config(
                "remote.base_url must be set to run remote operations",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BulkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/functions/v1/{}",
            config.base_url.trim_end_matches('/'),
            config.function_name(kind)
        );

        Ok(Self {
            client,
            kind,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn invoke(&self, item: &ItemDescriptor) -> Result<()> {
        debug!(kind = %self.kind, item = %item.id, "POST {}", self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(item);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request.send().await.map_err(BulkError::from_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(BulkError::from_transport)?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(BulkError::rate_limit(
                error_message(&body).unwrap_or_else(|| "rate limited".to_string()),
            ));
        }
        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(BulkError::remote(status.as_u16(), message));
        }

        if body.trim().is_empty() {
            return Ok(());
        }
        let parsed: Value = serde_json::from_str(&body)?;
        if parsed.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(BulkError::rejected(
                error_message(&body).unwrap_or_else(|| "remote reported failure".to_string()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteOperation for HttpOperation {
    async fn execute(&self, item: &ItemDescriptor) -> std::result::Result<(), FailureReason> {
        self.invoke(item).await.map_err(FailureReason::from)
    }
}

/// Pull `error` or `message` out of a JSON body, if there is one
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"].iter().find_map(|key| match value.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}
