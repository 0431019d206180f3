//! Port interfaces for event delivery and bulk invocation auth

use async_trait::async_trait;
use usersync_domain::{EventEnvelope, Result};

/// Delivers a single event envelope to the events API.
///
/// Implementations make exactly one attempt. A non-accepted response is a
/// `SyncError::Delivery`; a missing credential is a `SyncError::Config`.
#[async_trait]
pub trait EventTransport: Send + Sync {
    /// Send the envelope and return the raw response body on acceptance
    async fn send(&self, envelope: &EventEnvelope) -> Result<String>;
}

/// Authorizes a bulk sync invocation before any side effect happens
pub trait InvocationAuthorizer: Send + Sync {
    fn authorize(&self, token: &str) -> bool;
}
