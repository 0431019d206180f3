//! Event dispatcher
//!
//! Turns a user id into an event envelope and hands it to the transport.
//! The `try_*` methods propagate failures for bulk sync; the plain methods
//! log and absorb them for the live user hooks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};
use usersync_common::EmailValidator;
use usersync_domain::constants::{EVENT_CREATED_USER, EVENT_UPDATED_USER};
use usersync_domain::{DispatchOutcome, EventEnvelope, Result, SyncError, UserRecord};

use super::payload::{
    build_event_properties, build_profile_properties_at, registered_to_iso8601,
};
use super::ports::EventTransport;
use crate::user::ports::UserSource;

/// Builds and sends user events
pub struct EventDispatcher {
    users: Arc<dyn UserSource>,
    transport: Arc<dyn EventTransport>,
    email: EmailValidator,
}

impl EventDispatcher {
    pub fn new(users: Arc<dyn UserSource>, transport: Arc<dyn EventTransport>) -> Self {
        Self { users, transport, email: EmailValidator::new() }
    }

    /// Assemble the envelope for `user` without sending it.
    ///
    /// Historical envelopes are backdated to the registration time and carry
    /// no `wordpress_user_last_updated`.
    pub fn build_envelope(
        &self,
        user: &UserRecord,
        event_name: &str,
        historical: bool,
    ) -> Result<EventEnvelope> {
        Self::build_envelope_at(user, event_name, historical, Utc::now())
    }

    /// [`Self::build_envelope`] with an explicit clock.
    pub fn build_envelope_at(
        user: &UserRecord,
        event_name: &str,
        historical: bool,
        now: DateTime<Utc>,
    ) -> Result<EventEnvelope> {
        let mut profile = build_profile_properties_at(user, now);
        let properties = build_event_properties(user);

        let time = if historical {
            profile.wordpress_user_last_updated = None;
            Some(registered_to_iso8601(&user.registered)?)
        } else {
            None
        };

        Ok(EventEnvelope::new(profile, event_name, properties, time))
    }

    /// Dispatch one event, propagating every failure.
    ///
    /// A user without a valid email is skipped before any envelope is built
    /// or any request is made.
    #[instrument(skip(self))]
    pub async fn try_dispatch_event(
        &self,
        user_id: u64,
        event_name: &str,
        historical: bool,
    ) -> Result<DispatchOutcome> {
        let user = self
            .users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| SyncError::NotFound(format!("user {user_id}")))?;

        if !self.email.is_valid(&user.email) {
            info!(user_id, "Skipped user due to missing or invalid email address");
            return Ok(DispatchOutcome::Skipped { user_id });
        }

        let envelope = self.build_envelope(&user, event_name, historical)?;
        let response_body = self.transport.send(&envelope).await?;

        Ok(DispatchOutcome::Sent { response_body })
    }

    /// Dispatch one event, logging and absorbing any failure.
    pub async fn dispatch_event(
        &self,
        user_id: u64,
        event_name: &str,
        historical: bool,
    ) -> DispatchOutcome {
        match self.try_dispatch_event(user_id, event_name, historical).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    user_id,
                    event = event_name,
                    error_type = err.label(),
                    error = %err.message(),
                    "Request to Klaviyo failed"
                );
                DispatchOutcome::Failed { message: err.message().to_string() }
            }
        }
    }

    /// "Created User" event, propagating failures
    pub async fn try_create_profile(&self, user_id: u64, historical: bool) -> Result<DispatchOutcome> {
        self.try_dispatch_event(user_id, EVENT_CREATED_USER, historical).await
    }

    pub async fn create_profile(&self, user_id: u64, historical: bool) -> DispatchOutcome {
        self.dispatch_event(user_id, EVENT_CREATED_USER, historical).await
    }

    /// "Updated User" event; never historical
    pub async fn update_profile(&self, user_id: u64) -> DispatchOutcome {
        self.dispatch_event(user_id, EVENT_UPDATED_USER, false).await
    }
}
