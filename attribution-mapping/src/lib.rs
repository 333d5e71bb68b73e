//! Maps canonical analytics events onto an attribution vendor's vocabulary.
//!
//! # Components
//!
//! - **Router** ([`Router`]): picks the handling for identify, track and
//!   screen events and returns the [`SinkCall`]s they produce
//! - **Rules** ([`MappingRule`], [`EcommerceEvent`]): the fixed table of
//!   ecommerce track events and their field extractors
//! - **Merge** ([`merge_custom_properties`]): passes non-reserved custom
//!   properties through on track events
//! - **Integration** ([`AttributionIntegration`]): holds the config
//!   snapshot and dispatches routed calls to an [`AttributionSink`]
//!
//! # Example
//!
//! ```
//! use attribution_mapping::{AttributionIntegration, RecordingSink, vocab};
//! use attribution_types::TrackEvent;
//! use serde_json::json;
//!
//! let mut integration = AttributionIntegration::new(RecordingSink::new());
//! integration.create(json!({"useRichEventName": true}).as_object().unwrap());
//!
//! let properties = json!({"query": "running shoes"}).as_object().unwrap().clone();
//! integration.track(&TrackEvent::new("Products Searched").with_properties(properties));
//!
//! let events = integration.sink().logged_events();
//! assert_eq!(events[0].0, vocab::EVENT_SEARCH);
//! assert_eq!(events[0].1[vocab::PARAM_SEARCH_STRING], "running shoes");
//! ```

mod config;
mod error;
mod integration;
mod merge;
mod router;
mod rules;
mod sink;
pub mod vocab;

pub use config::{IntegrationConfig, RICH_EVENT_NAME_KEY};
pub use error::{MappingError, MappingResult};
pub use integration::AttributionIntegration;
pub use merge::{RESERVED_KEYWORDS, is_reserved, merge_custom_properties};
pub use router::Router;
pub use rules::{EcommerceEvent, MappedEvent, MappingRule, custom_event_name};
pub use sink::{AttributionSink, EmailHashType, RecordingSink, SinkCall};
