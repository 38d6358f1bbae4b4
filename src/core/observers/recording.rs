//! In-memory event recorder

use crate::core::batch::ItemDescriptor;
use crate::core::traits::{ProgressEvent, ProgressObserver};
use parking_lot::Mutex;

/// Keeps a copy of every event it receives
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().clone()
    }

    /// Names of the events received so far
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(ProgressEvent::kind).collect()
    }

    /// `current_item` of every `ItemStarted` event, in order
    pub fn started_items(&self) -> Vec<ItemDescriptor> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ProgressEvent::ItemStarted { snapshot, .. } => snapshot.current_item.clone(),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_event(&self, event: &ProgressEvent) {
        self.events.lock().push(event.clone());
    }
}
