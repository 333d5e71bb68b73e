//! Canonical analytics event model.
//!
//! This crate defines the vendor-neutral types that flow from the upstream
//! event source into the mapping engine:
//! - [`CanonicalEvent`] and its identify / track / screen payloads
//! - [`Properties`], the free-form property map carried by every event
//! - [`PropertiesExt`], typed optional reads over a property map
//!
//! Nothing in here knows about any particular attribution vendor; the
//! vocabulary translation lives in `attribution-mapping`.

mod event;
mod properties;

pub use event::{CanonicalEvent, IdentifyEvent, ScreenEvent, TrackEvent};
pub use properties::{Properties, PropertiesExt};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding canonical events.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
