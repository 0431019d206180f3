//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use usersync_domain::SyncError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SyncError);

impl From<InfraError> for SyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SyncError> for InfraError {
    fn from(value: SyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSyncError {
    fn into_sync_error(self) -> SyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SyncError */
/* -------------------------------------------------------------------------- */

impl IntoSyncError for HttpError {
    fn into_sync_error(self) -> SyncError {
        if self.is_timeout() {
            return SyncError::Delivery(format!(
                "HTTP request timed out: {}",
                error_chain(&self)
            ));
        }

        if self.is_connect() {
            return SyncError::Delivery(format!(
                "HTTP connection failure: {}",
                error_chain(&self)
            ));
        }

        if self.is_builder() {
            return SyncError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return SyncError::Delivery(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        SyncError::Delivery(error_chain(&self))
    }
}

/// Renders an error and its sources, since reqwest keeps the OS error
/// (for example "Connection refused") out of its own `Display`.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_sync_error())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml / io → SyncError */
/* -------------------------------------------------------------------------- */

impl IntoSyncError for serde_json::Error {
    fn into_sync_error(self) -> SyncError {
        SyncError::Source(format!("invalid JSON: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_sync_error())
    }
}

impl IntoSyncError for toml::de::Error {
    fn into_sync_error(self) -> SyncError {
        SyncError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_sync_error())
    }
}

impl IntoSyncError for std::io::Error {
    fn into_sync_error(self) -> SyncError {
        match self.kind() {
            std::io::ErrorKind::NotFound => SyncError::NotFound(self.to_string()),
            _ => SyncError::Source(format!("I/O failure: {self}")),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_sync_error())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
