//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::operations::OperationKind;
use tracing::debug;

impl Validate for ExecutorConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating executor configuration");

        if self.inter_item_delay_ms > MAX_INTER_ITEM_DELAY_MS {
            return Err(format!(
                "inter_item_delay_ms must be at most {} (got {})",
                MAX_INTER_ITEM_DELAY_MS, self.inter_item_delay_ms
            ));
        }
        Ok(())
    }
}

impl Validate for RemoteConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating remote configuration");

        if !self.base_url.is_empty() {
            let url = url::Url::parse(&self.base_url)
                .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(format!(
                    "base_url must use http or https, got '{}'",
                    url.scheme()
                ));
            }
        }

        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than 0".to_string());
        }

        if self.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            return Err("api_key cannot be blank".to_string());
        }

        for (kind, function) in &self.functions {
            kind.parse::<OperationKind>()?;
            if function.trim().is_empty() {
                return Err(format!("Function name for '{}' cannot be empty", kind));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;
        Ok(())
    }
}
