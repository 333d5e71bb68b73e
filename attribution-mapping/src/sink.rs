//! The downstream vendor SDK seam.

use attribution_types::Properties;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash type the vendor SDK applies to user emails before sending them.
/// Hashing happens inside the SDK, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailHashType {
    #[serde(rename = "SHA256")]
    Sha256,
}

impl fmt::Display for EmailHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => f.write_str("SHA256"),
        }
    }
}

/// The vendor SDK as seen by the mapping engine.
///
/// Hosts implement this over the real SDK; tests use [`RecordingSink`].
pub trait AttributionSink {
    /// Called once, the first time the integration is created. Use this to
    /// obtain or start the underlying SDK instance.
    fn attach(&mut self) {}

    /// Sets the vendor's customer user id.
    fn set_customer_user_id(&mut self, user_id: &str);

    /// Hands user emails to the SDK, which hashes them with `hash_type`.
    fn set_user_emails(&mut self, emails: &[String], hash_type: EmailHashType);

    /// Logs one in-app event.
    fn log_event(&mut self, name: &str, parameters: &Properties);
}

/// One call against the sink, as produced by the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SinkCall {
    SetCustomerUserId {
        user_id: String,
    },
    SetUserEmails {
        emails: Vec<String>,
        hash_type: EmailHashType,
    },
    LogEvent {
        name: String,
        parameters: Properties,
    },
}

impl SinkCall {
    /// Performs this call against `sink`.
    pub fn dispatch<S: AttributionSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::SetCustomerUserId { user_id } => sink.set_customer_user_id(user_id),
            Self::SetUserEmails { emails, hash_type } => sink.set_user_emails(emails, *hash_type),
            Self::LogEvent { name, parameters } => sink.log_event(name, parameters),
        }
    }
}

/// A sink that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    attach_count: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// How many times [`AttributionSink::attach`] was called.
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    /// Recorded `log_event` calls as `(name, parameters)` pairs.
    pub fn logged_events(&self) -> Vec<(&str, &Properties)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::LogEvent { name, parameters } => Some((name.as_str(), parameters)),
                _ => None,
            })
            .collect()
    }

    /// Recorded customer user ids.
    pub fn user_ids(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::SetCustomerUserId { user_id } => Some(user_id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Recorded email calls.
    pub fn email_calls(&self) -> Vec<(&[String], EmailHashType)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::SetUserEmails { emails, hash_type } => {
                    Some((emails.as_slice(), *hash_type))
                }
                _ => None,
            })
            .collect()
    }

    /// Drops all recorded calls. The attach count is kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl AttributionSink for RecordingSink {
    fn attach(&mut self) {
        self.attach_count += 1;
    }

    fn set_customer_user_id(&mut self, user_id: &str) {
        self.calls.push(SinkCall::SetCustomerUserId {
            user_id: user_id.to_string(),
        });
    }

    fn set_user_emails(&mut self, emails: &[String], hash_type: EmailHashType) {
        self.calls.push(SinkCall::SetUserEmails {
            emails: emails.to_vec(),
            hash_type,
        });
    }

    fn log_event(&mut self, name: &str, parameters: &Properties) {
        self.calls.push(SinkCall::LogEvent {
            name: name.to_string(),
            parameters: parameters.clone(),
        });
    }
}
