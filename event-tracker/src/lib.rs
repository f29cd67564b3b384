//! Event Tracker Runtime
//!
//! The runtime half of the analytics toolchain. Application code builds an
//! event value and calls [`TrackEvent::track`] on an [`EventTracker`]; the
//! `TrackEvent` implementations are produced at build time by `event-codegen`
//! and forward the derived event name and parameters to
//! [`EventTracker::log_event`].
//!
//! # Example Usage
//!
//! ```
//! use event_tracker::{EventTracker, MemorySink, ParamValue, Params};
//!
//! let sink = MemorySink::new();
//! let tracker = EventTracker::with_sink(sink.clone());
//!
//! tracker.log_event(
//!     "share_image",
//!     Params::from([("image_name", ParamValue::from("image.jpg"))]),
//! );
//!
//! assert_eq!(sink.events()[0].name, "share_image");
//! ```

pub mod params;
pub mod sink;

pub use params::{ParamValue, Params};
pub use sink::{EventSink, LogSink, MemorySink, RecordedEvent, TAG};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Records named events with their parameters
pub struct EventTracker {
    sink: Box<dyn EventSink>,
}

impl EventTracker {
    /// Create a tracker that writes events to the debug log
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }

    /// Create a tracker that records events into a custom sink
    pub fn with_sink(sink: impl EventSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Record an event name and its parameters
    pub fn log_event(&self, name: &str, params: Params) {
        self.sink.record(name, &params);
    }
}

impl Default for EventTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTracker").finish_non_exhaustive()
    }
}

/// Converts an event value into a name and parameters and logs it
///
/// Implemented by generated code, one impl per annotated event enum.
pub trait TrackEvent<E: ?Sized> {
    fn track(&self, event: &E);
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Ping {
        Sent { seq: u32 },
        Lost,
    }

    impl TrackEvent<Ping> for EventTracker {
        fn track(&self, event: &Ping) {
            let (name, params) = match event {
                Ping::Sent { seq } => ("sent", Params::from([("seq", ParamValue::from(seq))])),
                Ping::Lost => ("lost", Params::new()),
            };
            self.log_event(name, params);
        }
    }

    #[test]
    fn test_track_forwards_to_sink() {
        let sink = MemorySink::new();
        let tracker = EventTracker::with_sink(sink.clone());

        tracker.track(&Ping::Sent { seq: 7 });
        tracker.track(&Ping::Lost);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "sent");
        assert_eq!(events[0].params.get("seq"), Some(&ParamValue::UInt(7)));
        assert_eq!(events[1].name, "lost");
        assert!(events[1].params.is_empty());
    }

    #[test]
    fn test_default_tracker_uses_log_sink() {
        let tracker = EventTracker::default();
        tracker.log_event("button_tapped", Params::new());
    }
}
