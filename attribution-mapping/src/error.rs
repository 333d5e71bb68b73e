//! Error types for the mapping layer.
//!
//! Mapping itself is total; errors only arise when a host hands over a
//! configuration document that cannot be read.

use thiserror::Error;

/// Result type for mapping-layer operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors that can occur at the configuration boundary.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The configuration blob is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration blob is valid JSON but not a usable document.
    #[error("invalid destination config: {0}")]
    Config(String),
}
