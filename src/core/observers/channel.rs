//! Channel-backed observer

use crate::core::traits::{ProgressEvent, ProgressObserver};
use tokio::sync::mpsc;
use tracing::debug;

/// Forwards events into an unbounded channel
///
/// Sending never waits, so a slow consumer (a UI render loop, say) cannot
/// stall the run. Events are dropped once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_event(&self, event: &ProgressEvent) {
        if self.sender.send(event.clone()).is_err() {
            debug!("Progress receiver dropped, discarding {} event", event.kind());
        }
    }
}
