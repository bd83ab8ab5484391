//! Pipeline Progress Reporting
//!
//! The orchestrator emits `(step label, percent)` tuples as it advances;
//! rendering is entirely the caller's concern. Percentages within one run
//! are monotonically non-decreasing.

use std::sync::{Arc, Mutex, PoisonError};

/// Receiver for pipeline progress events.
pub trait ProgressSink: Send + Sync {
    fn report(&self, label: &str, percent: u8);
}

/// Sink that discards every event. Useful for post-hoc operations and tests
/// that do not care about progress.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _label: &str, _percent: u8) {}
}

/// Sink that records events for inspection in tests.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(String, u8)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<(String, u8)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProgressSink for RecordingSink {
    fn report(&self, label: &str, percent: u8) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((label.to_string(), percent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_captures_in_order() {
        let sink = RecordingSink::new();
        sink.report("first", 10);
        sink.report("second", 50);

        assert_eq!(
            sink.events(),
            vec![("first".to_string(), 10), ("second".to_string(), 50)]
        );
    }
}
