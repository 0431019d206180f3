//! Error types used throughout the sync engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the sync engine
///
/// Callers match on the variant to decide whether a failure is swallowed
/// (single-record hooks) or reported (bulk sync).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SyncError {
    /// Malformed settings input. Never reaches the sync engine.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or misconfigured credential.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or non-accepted response from the events API.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// A bulk invocation without valid authorization.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reading from or writing to a host store.
    #[error("Source error: {0}")]
    Source(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SyncError {
    /// Stable label suitable for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            Self::Delivery(_) => "delivery",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Source(_) => "source",
            Self::Internal(_) => "internal",
        }
    }

    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Config(m)
            | Self::Delivery(m)
            | Self::Auth(m)
            | Self::NotFound(m)
            | Self::InvalidInput(m)
            | Self::Source(m)
            | Self::Internal(m) => m,
        }
    }
}

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
