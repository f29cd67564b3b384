//! Event parameter types
//!
//! `Params` is the key-value mapping attached to every tracked event. Keys keep
//! their insertion order so that log lines and serialized output follow the
//! order in which the event's fields were declared.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single parameter value (primitive or string)
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// String value
    Str(String),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating-point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(v) => write!(f, "{}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::UInt(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl ParamValue {
    /// Borrow the value as a string slice, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

// Owned and borrowed conversions for every supported field type. The generated
// code matches on `&Event`, so field bindings arrive as references.
macro_rules! impl_from_value {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value as $target)
                }
            }

            impl From<&$ty> for ParamValue {
                fn from(value: &$ty) -> Self {
                    ParamValue::$variant(*value as $target)
                }
            }
        )+
    };
}

impl_from_value!(Int as i64: i8, i16, i32, i64, isize);
impl_from_value!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_value!(Float as f64: f32, f64);

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&bool> for ParamValue {
    fn from(value: &bool) -> Self {
        ParamValue::Bool(*value)
    }
}

impl From<char> for ParamValue {
    fn from(value: char) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<&char> for ParamValue {
    fn from(value: &char) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<&&str> for ParamValue {
    fn from(value: &&str) -> Self {
        ParamValue::Str((*value).to_string())
    }
}

/// Insertion-ordered mapping of parameter keys to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing the value of an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a parameter by key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, ParamValue); N]> for Params {
    fn from(entries: [(K, ParamValue); N]) -> Self {
        let mut params = Params::new();
        for (key, value) in entries {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut params = Params::new();
        params.insert("image_name", "image.jpg");
        params.insert("count", 3i32);
        params.insert("image_name", "other.jpg");

        assert_eq!(params.len(), 2);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["image_name", "count"]);
        assert_eq!(params.get("image_name"), Some(&ParamValue::Str("other.jpg".to_string())));
        assert_eq!(params.get("count"), Some(&ParamValue::Int(3)));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_from_array_of_borrowed_fields() {
        let image_name = String::from("image.jpg");
        let retries: u8 = 2;
        let ratio = 0.5f32;

        let params = Params::from([
            ("image_name", ParamValue::from(&image_name)),
            ("retries", ParamValue::from(&retries)),
            ("ratio", ParamValue::from(&ratio)),
        ]);

        assert_eq!(params.get("image_name").and_then(ParamValue::as_str), Some("image.jpg"));
        assert_eq!(params.get("retries"), Some(&ParamValue::UInt(2)));
        assert_eq!(params.get("ratio"), Some(&ParamValue::Float(0.5)));
    }

    #[test]
    fn test_display() {
        let params = Params::from([
            ("image_name", ParamValue::from("image.jpg")),
            ("full_string", ParamValue::from("some string message")),
        ]);
        assert_eq!(
            params.to_string(),
            "{image_name=image.jpg, full_string=some string message}"
        );
        assert_eq!(Params::new().to_string(), "{}");
    }

    #[test]
    fn test_serialize_as_object() {
        let params = Params::from([
            ("b", ParamValue::from(true)),
            ("a", ParamValue::from(-4i64)),
        ]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"b":true,"a":-4}"#);
    }
}
