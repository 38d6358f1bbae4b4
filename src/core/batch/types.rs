//! Batch executor type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One unit of work in a batch
///
/// The executor treats descriptors as opaque: it clones them into progress
/// snapshots and failure records but never changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Identifier of the target resource
    pub id: String,
    /// Human-readable label for progress displays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Extra attributes the remote operation needs (reference URL, handle, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ItemDescriptor {
    /// Create a descriptor with only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Label if present, otherwise the id
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl fmt::Display for ItemDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", label, self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Why a remote operation could not complete for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct FailureReason {
    /// Human-readable message
    pub message: String,
    /// Optional machine code (`timeout`, `rate_limited`, `http_500`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FailureReason {
    /// Create a reason without a code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a reason with a machine code
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl From<&str> for FailureReason {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for FailureReason {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// A failed item together with the reason it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub item: ItemDescriptor,
    pub reason: FailureReason,
}

/// Executor lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run has started yet
    #[default]
    Idle,
    /// A run is iterating its batch
    Running,
    /// The last run has finished (possibly cut short by cancellation)
    Completed,
}

/// Tri-state summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunSummary {
    AllSucceeded,
    AllFailed,
    /// At least one success and at least one failure
    Mixed,
}

impl RunSummary {
    /// Summarize recorded outcomes; `None` when nothing was recorded
    pub fn from_counts(succeeded: usize, failed: usize) -> Option<Self> {
        match (succeeded, failed) {
            (0, 0) => None,
            (_, 0) => Some(Self::AllSucceeded),
            (0, _) => Some(Self::AllFailed),
            _ => Some(Self::Mixed),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AllSucceeded => "all-succeeded",
            Self::AllFailed => "all-failed",
            Self::Mixed => "mixed",
        };
        f.write_str(s)
    }
}
