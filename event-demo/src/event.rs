//! Analytics events of the demo app

use event_marker::analytics_event;

#[analytics_event]
#[derive(Debug, Clone, PartialEq)]
pub enum MyEvent {
    ShareImage { image_name: String, full_string: String },
    ButtonTapped,
}

include!(concat!(env!("OUT_DIR"), "/my_event.rs"));

/// Screen lifecycle events
///
/// `Scrolled` only has positional fields, so it is not tracked.
#[analytics_event]
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Opened { screen_name: String, depth: u32 },
    Scrolled(u32),
    Closed,
}

include!(concat!(env!("OUT_DIR"), "/screen_event.rs"));
