//! Progress observer implementations
//!
//! - `TracingObserver`: forwards events to `tracing`
//! - `ChannelObserver`: hands events to another task without blocking the run
//! - `RecordingObserver`: keeps every event in memory (test harnesses, audits)
//! - `ObserverSet`, `FnObserver`, `NoopObserver`: composition helpers

mod channel;
mod composite;
mod logging;
mod recording;

pub use channel::ChannelObserver;
pub use composite::{FnObserver, NoopObserver, ObserverSet};
pub use logging::TracingObserver;
pub use recording::RecordingObserver;
