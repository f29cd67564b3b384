// Tracks events through the impl generated by build.rs
use event_demo::event::{MyEvent, ScreenEvent};
use event_demo::legacy::LegacyEvent;
use event_tracker::{EventTracker, MemorySink, ParamValue, TrackEvent};

fn tracker() -> (EventTracker, MemorySink) {
    let sink = MemorySink::new();
    (EventTracker::with_sink(sink.clone()), sink)
}

#[test]
fn test_share_image_event() {
    let (tracker, sink) = tracker();

    tracker.track(&MyEvent::ShareImage {
        image_name: "image.jpg".to_string(),
        full_string: "some string message".to_string(),
    });

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "share_image");

    let keys: Vec<_> = events[0].params.keys().collect();
    assert_eq!(keys, vec!["image_name", "full_string"]);
    assert_eq!(
        events[0].params.get("image_name"),
        Some(&ParamValue::Str("image.jpg".to_string()))
    );
    assert_eq!(
        events[0].params.get("full_string").and_then(ParamValue::as_str),
        Some("some string message")
    );
}

#[test]
fn test_button_tapped_has_empty_params() {
    let (tracker, sink) = tracker();

    tracker.track(&MyEvent::ButtonTapped);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "button_tapped");
    assert!(events[0].params.is_empty());
}

#[test]
fn test_ui_actions() {
    let (tracker, sink) = tracker();

    event_demo::on_share_clicked(&tracker, "cat.png", "look");
    event_demo::on_button_tapped(&tracker);

    let names: Vec<_> = sink.events().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["share_image", "button_tapped"]);
}

#[test]
fn test_screen_events_skip_positional_variant() {
    let (tracker, sink) = tracker();

    event_demo::on_screen_opened(&tracker, "settings", 2);
    tracker.track(&ScreenEvent::Scrolled(40));
    tracker.track(&ScreenEvent::Closed);

    let events = sink.events();
    let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["opened", "closed"]);
    assert_eq!(
        events[0].params.get("screen_name").and_then(ParamValue::as_str),
        Some("settings")
    );
    assert_eq!(events[0].params.get("depth"), Some(&ParamValue::UInt(2)));
    assert!(events[1].params.is_empty());
}

#[test]
fn test_legacy_event_keys_are_snake_case() {
    let (tracker, sink) = tracker();

    tracker.track(&LegacyEvent::ShareImage {
        imageName: "cat.png".to_string(),
        fullString: "look".to_string(),
    });
    tracker.track(&LegacyEvent::ButtonTapped);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "share_image");
    let keys: Vec<_> = events[0].params.keys().collect();
    assert_eq!(keys, vec!["image_name", "full_string"]);
    assert_eq!(
        events[0].params.get("image_name").and_then(ParamValue::as_str),
        Some("cat.png")
    );
    assert_eq!(events[1].name, "button_tapped");
}

#[test]
fn test_default_tracker_logs() {
    let tracker = EventTracker::new();
    event_demo::on_button_tapped(&tracker);
}
