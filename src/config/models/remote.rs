//! Remote backend configuration

use super::*;
use crate::core::operations::OperationKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Managed backend the HTTP adapter talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Backend base URL, e.g. `https://project.example.co`
    #[serde(default)]
    pub base_url: String,
    /// Bearer key sent with every call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Function name overrides keyed by operation kind (`stats`, `type`, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub functions: BTreeMap<String, String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
            functions: BTreeMap::new(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Backend function invoked for `kind`
    pub fn function_name(&self, kind: OperationKind) -> &str {
        self.functions
            .get(kind.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_function())
    }

    /// Merge remote configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.base_url.is_empty() {
            self.base_url = other.base_url;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.timeout_seconds != default_timeout_seconds() {
            self.timeout_seconds = other.timeout_seconds;
        }
        self.functions.extend(other.functions);
        self
    }
}
