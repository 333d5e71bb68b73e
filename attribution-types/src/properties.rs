//! Dynamically typed property maps.
//!
//! Property values arrive untyped (string, number, boolean, null, nested
//! map, list). Readers here attempt a typed read and return `None` on a
//! missing key or a type mismatch, so callers omit the field instead of
//! failing.

use serde_json::Value;

/// A free-form property map. Keys are kept in sorted order, which makes
/// mapped output deterministic.
pub type Properties = serde_json::Map<String, Value>;

/// Typed optional reads over a [`Properties`] map.
pub trait PropertiesExt {
    /// Returns the value under `key`, treating an explicit `null` as absent.
    fn value(&self, key: &str) -> Option<&Value>;

    /// Returns the value under `key` if it is a string.
    fn str_value(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    /// Returns the value under `key` if it is a non-empty string.
    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.str_value(key).filter(|s| !s.is_empty())
    }

    /// Returns the value under `key` if it is a list whose every entry is a
    /// map. A list containing anything else is rejected as a whole.
    fn object_list(&self, key: &str) -> Option<Vec<&Properties>> {
        self.value(key)?
            .as_array()?
            .iter()
            .map(Value::as_object)
            .collect()
    }
}

impl PropertiesExt for Properties {
    fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}
