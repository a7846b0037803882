//! Replay error types.

use prereview_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the replay tool.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The event log could not be read.
    #[error("event log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The event log or the output could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A query failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
