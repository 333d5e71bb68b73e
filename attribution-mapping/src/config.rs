//! Destination configuration.

use crate::error::{MappingError, MappingResult};
use attribution_types::Properties;
use serde_json::Value;

/// Destination config key controlling screen event naming.
pub const RICH_EVENT_NAME_KEY: &str = "useRichEventName";

/// Integration settings. Replaced wholesale on every create/update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Name screen events `"Viewed {name} Screen"` instead of `"screen"`.
    pub use_rich_screen_naming: bool,
}

impl IntegrationConfig {
    /// Reads settings from a destination config map.
    ///
    /// A missing or non-boolean `useRichEventName` means `false`. Keys this
    /// integration does not use (`apiKey`, `appleAppId`, ...) are ignored.
    pub fn from_destination_config(config: &Properties) -> Self {
        Self {
            use_rich_screen_naming: config
                .get(RICH_EVENT_NAME_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// Parses a raw destination config document.
    ///
    /// Fails if the text is not JSON or the document is not an object.
    pub fn from_json(json: &str) -> MappingResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let config = value.as_object().ok_or_else(|| {
            MappingError::Config(format!("expected a JSON object, got {}", json_kind(&value)))
        })?;
        Ok(Self::from_destination_config(config))
    }
}

impl From<&Properties> for IntegrationConfig {
    fn from(config: &Properties) -> Self {
        Self::from_destination_config(config)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
