//! The destination integration: config lifecycle plus event dispatch.

use crate::config::IntegrationConfig;
use crate::router::Router;
use crate::sink::{AttributionSink, SinkCall};
use attribution_types::{CanonicalEvent, IdentifyEvent, ScreenEvent, TrackEvent};
use tracing::debug;

/// Maps canonical events onto an [`AttributionSink`].
///
/// Each event is processed to completion against the config snapshot
/// current when it arrived. Callers serialize config updates with event
/// processing; `&mut self` on every entry point enforces that.
pub struct AttributionIntegration<S> {
    sink: S,
    config: IntegrationConfig,
    attached: bool,
}

impl<S: AttributionSink> AttributionIntegration<S> {
    /// Destination key this integration registers under.
    pub const KEY: &'static str = "AppsFlyer";

    /// Wraps a sink. Until [`create`](Self::create) runs, the default
    /// config applies and the sink is not attached.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            config: IntegrationConfig::default(),
            attached: false,
        }
    }

    pub fn key(&self) -> &'static str {
        Self::KEY
    }

    /// Attaches the sink on first call and applies `config`.
    pub fn create(&mut self, config: impl Into<IntegrationConfig>) {
        if !self.attached {
            self.sink.attach();
            self.attached = true;
        }
        self.config = config.into();
        debug!(
            use_rich_screen_naming = self.config.use_rich_screen_naming,
            "Attribution integration created"
        );
    }

    /// Replaces the config. Never re-attaches the sink.
    pub fn update(&mut self, config: impl Into<IntegrationConfig>) {
        self.config = config.into();
        debug!(
            use_rich_screen_naming = self.config.use_rich_screen_naming,
            "Attribution integration config updated"
        );
    }

    pub fn config(&self) -> IntegrationConfig {
        self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Routes any canonical event.
    pub fn process(&mut self, event: &CanonicalEvent) {
        match event {
            CanonicalEvent::Identify(identify) => self.identify(identify),
            CanonicalEvent::Track(track) => self.track(track),
            CanonicalEvent::Screen(screen) => self.screen(screen),
        }
    }

    pub fn identify(&mut self, event: &IdentifyEvent) {
        for call in self.router().route_identify(event) {
            match &call {
                SinkCall::SetCustomerUserId { user_id } => {
                    debug!(user_id = %user_id, "Setting customer user id");
                }
                SinkCall::SetUserEmails { hash_type, .. } => {
                    debug!(hash_type = %hash_type, "Setting user email");
                }
                SinkCall::LogEvent { .. } => {}
            }
            call.dispatch(&mut self.sink);
        }
    }

    /// Drops the event silently if its name is empty.
    pub fn track(&mut self, event: &TrackEvent) {
        let Some(mapped) = self.router().route_track(event) else {
            debug!("Event name is empty, dropping track event");
            return;
        };
        self.sink.log_event(&mapped.name, &mapped.parameters);
        debug!(
            event = %event.event,
            mapped = %mapped.name,
            parameters = mapped.parameters.len(),
            "Logged track event"
        );
    }

    pub fn screen(&mut self, event: &ScreenEvent) {
        let mapped = self.router().route_screen(event);
        self.sink.log_event(&mapped.name, &mapped.parameters);
        debug!(
            mapped = %mapped.name,
            parameters = mapped.parameters.len(),
            "Logged screen event"
        );
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn router(&self) -> Router {
        Router::new(self.config)
    }
}
