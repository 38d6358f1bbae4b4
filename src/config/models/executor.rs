//! Executor pacing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch executor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Pause between two consecutive remote calls, in milliseconds
    #[serde(default = "default_inter_item_delay_ms")]
    pub inter_item_delay_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            inter_item_delay_ms: default_inter_item_delay_ms(),
        }
    }
}

impl ExecutorConfig {
    pub fn inter_item_delay(&self) -> Duration {
        Duration::from_millis(self.inter_item_delay_ms)
    }

    /// Merge executor configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.inter_item_delay_ms != default_inter_item_delay_ms() {
            self.inter_item_delay_ms = other.inter_item_delay_ms;
        }
        self
    }
}
