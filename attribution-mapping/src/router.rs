//! Event routing: canonical event in, sink calls out.
//!
//! The router is a plain value holding a config snapshot. It performs no
//! I/O; the integration dispatches whatever it returns.

use crate::config::IntegrationConfig;
use crate::rules::{MappedEvent, MappingRule};
use crate::sink::{EmailHashType, SinkCall};
use crate::vocab::{SCREEN_EVENT, SCREEN_EVENT_UNNAMED, viewed_screen};
use attribution_types::{
    CanonicalEvent, IdentifyEvent, PropertiesExt, ScreenEvent, TrackEvent,
};

/// Trait key holding the user's email on identify events.
const EMAIL_TRAIT: &str = "email";

/// Property consulted for the screen name when the event itself has none.
const SCREEN_NAME_PROPERTY: &str = "name";

/// Selects and applies the mapping for each canonical event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router {
    config: IntegrationConfig,
}

impl Router {
    pub fn new(config: IntegrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> IntegrationConfig {
        self.config
    }

    /// Maps one event to the sink calls it produces, in dispatch order.
    ///
    /// Track and screen events yield at most one call; an identify event
    /// yields zero to two.
    pub fn route(&self, event: &CanonicalEvent) -> Vec<SinkCall> {
        match event {
            CanonicalEvent::Identify(identify) => self.route_identify(identify),
            CanonicalEvent::Track(track) => self
                .route_track(track)
                .map(log_event)
                .into_iter()
                .collect(),
            CanonicalEvent::Screen(screen) => vec![log_event(self.route_screen(screen))],
        }
    }

    /// User id first, then email. Each is sent only when non-empty.
    pub fn route_identify(&self, event: &IdentifyEvent) -> Vec<SinkCall> {
        let mut calls = Vec::with_capacity(2);
        if let Some(user_id) = event.user_id.as_deref().filter(|id| !id.is_empty()) {
            calls.push(SinkCall::SetCustomerUserId {
                user_id: user_id.to_string(),
            });
        }
        if let Some(email) = event.traits.non_empty_str(EMAIL_TRAIT) {
            calls.push(SinkCall::SetUserEmails {
                emails: vec![email.to_string()],
                hash_type: EmailHashType::Sha256,
            });
        }
        calls
    }

    /// Returns `None` for an empty or whitespace-only event name.
    pub fn route_track(&self, event: &TrackEvent) -> Option<MappedEvent> {
        if event.event.trim().is_empty() {
            return None;
        }
        Some(MappingRule::for_event(&event.event).apply(&event.event, &event.properties))
    }

    /// Screen properties pass through unfiltered.
    pub fn route_screen(&self, event: &ScreenEvent) -> MappedEvent {
        MappedEvent {
            name: self.screen_name(event),
            parameters: event.properties.clone(),
        }
    }

    /// The vendor event name for a screen event under the current config.
    pub fn screen_name(&self, event: &ScreenEvent) -> String {
        if !self.config.use_rich_screen_naming {
            return SCREEN_EVENT.to_string();
        }
        if !event.name.is_empty() {
            viewed_screen(&event.name)
        } else if let Some(name) = event.properties.non_empty_str(SCREEN_NAME_PROPERTY) {
            viewed_screen(name)
        } else {
            SCREEN_EVENT_UNNAMED.to_string()
        }
    }
}

fn log_event(mapped: MappedEvent) -> SinkCall {
    SinkCall::LogEvent {
        name: mapped.name,
        parameters: mapped.parameters,
    }
}
