//! Progress observer trait definitions
//!
//! The executor pushes an event to its observer at every state change.

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::batch::{FailureReason, ItemDescriptor, Outcome, ProgressSnapshot};

/// State change reported by the executor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// `run` was called with an empty batch; no run took place
    NothingSelected,
    /// `retry_failures` was called with no recorded failures
    NothingToRetry,
    /// Counters were reset for a new run
    RunStarted {
        run_id: Uuid,
        snapshot: ProgressSnapshot,
    },
    /// `snapshot.current_item` is about to be sent to the remote operation
    ItemStarted {
        run_id: Uuid,
        snapshot: ProgressSnapshot,
    },
    /// An outcome was recorded for `item`
    ItemFinished {
        run_id: Uuid,
        item: ItemDescriptor,
        failure: Option<FailureReason>,
        snapshot: ProgressSnapshot,
    },
    /// The run is over; carries the final outcome and its summary
    RunFinished {
        run_id: Uuid,
        snapshot: ProgressSnapshot,
        outcome: Outcome,
    },
}

impl ProgressEvent {
    /// Ledger snapshot carried by the event, if any
    pub fn snapshot(&self) -> Option<&ProgressSnapshot> {
        match self {
            Self::NothingSelected | Self::NothingToRetry => None,
            Self::RunStarted { snapshot, .. }
            | Self::ItemStarted { snapshot, .. }
            | Self::ItemFinished { snapshot, .. }
            | Self::RunFinished { snapshot, .. } => Some(snapshot),
        }
    }

    pub fn run_id(&self) -> Option<Uuid> {
        match self {
            Self::NothingSelected | Self::NothingToRetry => None,
            Self::RunStarted { run_id, .. }
            | Self::ItemStarted { run_id, .. }
            | Self::ItemFinished { run_id, .. }
            | Self::RunFinished { run_id, .. } => Some(*run_id),
        }
    }

    /// Short event name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NothingSelected => "nothing_selected",
            Self::NothingToRetry => "nothing_to_retry",
            Self::RunStarted { .. } => "run_started",
            Self::ItemStarted { .. } => "item_started",
            Self::ItemFinished { .. } => "item_finished",
            Self::RunFinished { .. } => "run_finished",
        }
    }
}

/// Receives progress events synchronously from the run loop
///
/// Implementations must return quickly: the executor waits for `on_event`
/// before continuing. Slow consumers should hand events off to a channel
/// (see `ChannelObserver`).
pub trait ProgressObserver: Send + Sync {
    fn on_event(&self, event: &ProgressEvent);
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for Arc<T> {
    fn on_event(&self, event: &ProgressEvent) {
        (**self).on_event(event)
    }
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for Box<T> {
    fn on_event(&self, event: &ProgressEvent) {
        (**self).on_event(event)
    }
}
