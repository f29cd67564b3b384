//! Generator configuration types
//!
//! This module defines the knobs of the code generator: which marker to look
//! for and which runtime tracker the generated code calls into.

use serde::{Deserialize, Serialize};

/// Configuration for the code generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Marker attribute name (last path segment, e.g. `analytics_event`)
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Path of the runtime tracker crate as seen from the generated code
    #[serde(default = "default_tracker_crate")]
    pub tracker_crate: String,

    /// Tracker type inside the tracker crate
    #[serde(default = "default_tracker_type")]
    pub tracker_type: String,

    /// Whether to start every artifact with an `@generated` header
    #[serde(default = "default_true")]
    pub header: bool,
}

fn default_marker() -> String {
    "analytics_event".to_string()
}

fn default_tracker_crate() -> String {
    "::event_tracker".to_string()
}

fn default_tracker_type() -> String {
    "EventTracker".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            tracker_crate: default_tracker_crate(),
            tracker_type: default_tracker_type(),
            header: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the marker attribute name
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Builder method: set the tracker crate path
    pub fn with_tracker_crate(mut self, path: impl Into<String>) -> Self {
        self.tracker_crate = path.into();
        self
    }

    /// Builder method: set the tracker type name
    pub fn with_tracker_type(mut self, name: impl Into<String>) -> Self {
        self.tracker_type = name.into();
        self
    }

    /// Builder method: enable or disable the `@generated` header
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    /// Fully qualified path of an item in the tracker crate
    pub fn tracker_item(&self, item: &str) -> String {
        format!("{}::{}", self.tracker_crate.trim_end_matches("::"), item)
    }

    /// Fully qualified path of the tracker type
    pub fn tracker_type_path(&self) -> String {
        self.tracker_item(&self.tracker_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new()
            .with_marker("tracked")
            .with_tracker_crate("crate::analytics")
            .with_tracker_type("Tracker")
            .with_header(false);

        assert_eq!(config.marker, "tracked");
        assert_eq!(config.tracker_type_path(), "crate::analytics::Tracker");
        assert_eq!(config.tracker_item("Params"), "crate::analytics::Params");
        assert!(!config.header);
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new();
        assert_eq!(config.marker, "analytics_event");
        assert_eq!(config.tracker_type_path(), "::event_tracker::EventTracker");
        assert!(config.header);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: GeneratorConfig = toml::from_str(r#"marker = "tracked""#).unwrap();
        assert_eq!(config.marker, "tracked");
        assert_eq!(config.tracker_crate, "::event_tracker");
        assert!(config.header);
    }
}
