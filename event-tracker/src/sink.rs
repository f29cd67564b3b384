//! Event sinks
//!
//! A sink is where `EventTracker::log_event` records an event. The default
//! sink writes a debug log line; `MemorySink` keeps events in memory.

use crate::params::Params;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Log target used for tracked events
pub const TAG: &str = "EventTracker";

/// Destination for tracked events
pub trait EventSink: Send + Sync {
    /// Record one event
    fn record(&self, name: &str, params: &Params);
}

/// Writes every event as a debug-level log line
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, name: &str, params: &Params) {
        log::debug!(target: TAG, "Logging event name: {}; params: {}", name, params);
    }
}

/// An event captured by `MemorySink`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedEvent {
    /// Derived event name (e.g. `share_image`)
    pub name: String,
    /// Event parameters in declaration order
    pub params: Params,
    /// When the event was recorded
    pub recorded_at: DateTime<Utc>,
}

/// Keeps recorded events in memory
///
/// Clones share the same buffer, so a test can keep one handle while the
/// tracker owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far
    pub fn events(&self) -> Vec<RecordedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return all recorded events
    pub fn take(&self) -> Vec<RecordedEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventSink for MemorySink {
    fn record(&self, name: &str, params: &Params) {
        log::trace!(target: TAG, "Recording event in memory: {}", name);
        let event = RecordedEvent {
            name: name.to_string(),
            params: params.clone(),
            recorded_at: Utc::now(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_memory_sink_shares_buffer_between_clones() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.record("button_tapped", &Params::new());
        sink.record(
            "share_image",
            &Params::from([("image_name", ParamValue::from("a.jpg"))]),
        );

        let events = handle.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "button_tapped");
        assert!(events[0].params.is_empty());
        assert_eq!(events[1].params.get("image_name").and_then(ParamValue::as_str), Some("a.jpg"));
        assert!(events[0].recorded_at <= events[1].recorded_at);

        assert_eq!(handle.take().len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_log_sink_does_not_panic_without_logger() {
        LogSink.record("button_tapped", &Params::new());
    }
}
