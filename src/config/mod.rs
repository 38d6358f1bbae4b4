//! Configuration management for bulkrun
//!
//! This module handles loading, validation, and merging of configuration from
//! YAML files and `BULKRUN_*` environment variables.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BulkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable names read by [`Config::from_env`]
pub mod env {
    pub const BASE_URL: &str = "BULKRUN_BASE_URL";
    pub const API_KEY: &str = "BULKRUN_API_KEY";
    pub const TIMEOUT_SECONDS: &str = "BULKRUN_TIMEOUT_SECONDS";
    pub const INTER_ITEM_DELAY_MS: &str = "BULKRUN_INTER_ITEM_DELAY_MS";
    pub const LOG_LEVEL: &str = "BULKRUN_LOG_LEVEL";
    pub const LOG_JSON: &str = "BULKRUN_LOG_JSON";
}

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Executor pacing
    #[serde(default)]
    pub executor: ExecutorConfig,
    /// Remote backend used by the HTTP adapter
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BulkError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| BulkError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(env::BASE_URL) {
            config.remote.base_url = base_url;
        }
        if let Some(api_key) = lookup(env::API_KEY) {
            config.remote.api_key = Some(api_key);
        }
        if let Some(timeout) = lookup(env::TIMEOUT_SECONDS) {
            config.remote.timeout_seconds = parse_var(env::TIMEOUT_SECONDS, &timeout)?;
        }
        if let Some(delay) = lookup(env::INTER_ITEM_DELAY_MS) {
            config.executor.inter_item_delay_ms = parse_var(env::INTER_ITEM_DELAY_MS, &delay)?;
        }
        if let Some(level) = lookup(env::LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(json) = lookup(env::LOG_JSON) {
            config.logging.json = parse_var(env::LOG_JSON, &json)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.executor
            .validate()
            .map_err(|e| BulkError::Config(format!("Executor config error: {}", e)))?;

        self.remote
            .validate()
            .map_err(|e| BulkError::Config(format!("Remote config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| BulkError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.executor = self.executor.merge(other.executor);
        self.remote = self.remote.merge(other.remote);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BulkError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BulkError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| BulkError::Config(format!("Invalid value for {}: '{}' ({})", name, value, e)))
}
