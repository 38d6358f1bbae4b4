//! Observer that reports progress through `tracing`

use crate::core::traits::{ProgressEvent, ProgressObserver};
use tracing::{info, warn};

/// Logs each progress event, tagged with the operation it belongs to
#[derive(Debug, Clone)]
pub struct TracingObserver {
    operation: String,
}

impl TracingObserver {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

impl ProgressObserver for TracingObserver {
    fn on_event(&self, event: &ProgressEvent) {
        let op = self.operation.as_str();
        match event {
            ProgressEvent::NothingSelected => warn!(operation = op, "Nothing selected"),
            ProgressEvent::NothingToRetry => info!(operation = op, "Nothing to retry"),
            ProgressEvent::RunStarted { run_id, snapshot } => {
                info!(operation = op, %run_id, total = snapshot.total, "Started");
            }
            ProgressEvent::ItemStarted { snapshot, .. } => {
                if let Some(item) = &snapshot.current_item {
                    info!(
                        operation = op,
                        "[{}/{}] {}",
                        snapshot.completed + 1,
                        snapshot.total,
                        item.display_name()
                    );
                }
            }
            ProgressEvent::ItemFinished {
                item,
                failure,
                snapshot,
                ..
            } => match failure {
                Some(reason) => warn!(
                    operation = op,
                    progress = snapshot.progress_percent,
                    "{} failed: {}",
                    item.display_name(),
                    reason
                ),
                None => info!(
                    operation = op,
                    progress = snapshot.progress_percent,
                    "{} done",
                    item.display_name()
                ),
            },
            ProgressEvent::RunFinished { outcome, .. } => info!(
                operation = op,
                succeeded = outcome.succeeded,
                failed = outcome.failed,
                cancelled = outcome.cancelled,
                "Finished: {}",
                outcome.summary
            ),
        }
    }
}
