//! Events described by `events.toml`, keeping the field names of the schema
//! they were exported from

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyEvent {
    ShareImage { imageName: String, fullString: String },
    ButtonTapped,
}

include!(concat!(env!("OUT_DIR"), "/legacy_event.rs"));
