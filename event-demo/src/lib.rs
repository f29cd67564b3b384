//! Demo application glue
//!
//! Stands in for the UI layer: each action builds an event value and hands it
//! to the tracker through the generated `TrackEvent` impl.

pub mod event;
pub mod legacy;

use event::{MyEvent, ScreenEvent};
use event_tracker::{EventTracker, TrackEvent};

/// The share button was pressed
pub fn on_share_clicked(tracker: &EventTracker, image_name: &str, message: &str) {
    tracker.track(&MyEvent::ShareImage {
        image_name: image_name.to_string(),
        full_string: message.to_string(),
    });
}

/// A plain button was tapped
pub fn on_button_tapped(tracker: &EventTracker) {
    tracker.track(&MyEvent::ButtonTapped);
}

/// A screen came into view
pub fn on_screen_opened(tracker: &EventTracker, screen_name: &str, depth: u32) {
    tracker.track(&ScreenEvent::Opened {
        screen_name: screen_name.to_string(),
        depth,
    });
}
