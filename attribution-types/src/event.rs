//! Canonical identify / track / screen events.
//!
//! Events are already validated upstream; this module only gives them a
//! typed shape. The JSON form matches what the upstream source emits:
//!
//! ```json
//! {"type": "track", "event": "Order Completed", "properties": {"total": 10}}
//! {"type": "identify", "userId": "u-1", "traits": {"email": "a@b.com"}}
//! {"type": "screen", "name": "Home", "properties": {}}
//! ```

use crate::Properties;
use serde::{Deserialize, Serialize};

/// An identify call: who the user is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyEvent {
    /// The host application's user identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// User traits (e.g. `email`).
    #[serde(default)]
    pub traits: Properties,
}

impl IdentifyEvent {
    /// Creates an identify event for the given user id.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            traits: Properties::new(),
        }
    }

    /// Creates an identify event with no user id.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Replaces the traits map.
    #[must_use]
    pub fn with_traits(mut self, traits: Properties) -> Self {
        self.traits = traits;
        self
    }
}

/// A track call: something the user did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackEvent {
    /// The canonical event name (e.g. `"Product Viewed"`).
    pub event: String,

    #[serde(default)]
    pub properties: Properties,
}

impl TrackEvent {
    /// Creates a track event with no properties.
    #[must_use]
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            properties: Properties::new(),
        }
    }

    /// Replaces the property map.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// A screen call: which screen the user is looking at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenEvent {
    /// The screen name. May be empty.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub properties: Properties,
}

impl ScreenEvent {
    /// Creates a screen event with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::new(),
        }
    }

    /// Replaces the property map.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// A vendor-neutral analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CanonicalEvent {
    Identify(IdentifyEvent),
    Track(TrackEvent),
    Screen(ScreenEvent),
}

impl CanonicalEvent {
    /// Decodes a canonical event from its upstream JSON form.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short lowercase name of the event kind, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Identify(_) => "identify",
            Self::Track(_) => "track",
            Self::Screen(_) => "screen",
        }
    }
}

impl From<IdentifyEvent> for CanonicalEvent {
    fn from(event: IdentifyEvent) -> Self {
        Self::Identify(event)
    }
}

impl From<TrackEvent> for CanonicalEvent {
    fn from(event: TrackEvent) -> Self {
        Self::Track(event)
    }
}

impl From<ScreenEvent> for CanonicalEvent {
    fn from(event: ScreenEvent) -> Self {
        Self::Screen(event)
    }
}
