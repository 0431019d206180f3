//! Shared fixtures for `usersync-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use usersync_core::EventDispatcher;
use usersync_domain::{Credentials, EventEnvelope, UserRecord};
use usersync_infra::{JsonUserSource, KlaviyoClient, KlaviyoClientConfig};
use wiremock::MockServer;

pub const PRIVATE_KEY: &str = "pk_0123456789abcdef";

pub fn user(id: u64, email: &str, roles: &[&str]) -> UserRecord {
    UserRecord {
        id,
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        login: format!("user{id}"),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        registered: "2023-05-01 10:00:00".to_string(),
    }
}

pub fn client_config(server: &MockServer) -> KlaviyoClientConfig {
    KlaviyoClientConfig {
        events_url: format!("{}/api/events/", server.uri()),
        revision: "2023-02-22".to_string(),
        timeout: Duration::from_secs(2),
    }
}

pub fn klaviyo_client(server: &MockServer) -> KlaviyoClient {
    KlaviyoClient::new(client_config(server), Credentials::new(Some(PRIVATE_KEY.to_string())))
        .expect("klaviyo client should build")
}

/// Dispatcher over an in-memory user export and a client pointed at `server`.
pub fn dispatcher(server: &MockServer, users: Vec<UserRecord>) -> EventDispatcher {
    EventDispatcher::new(
        Arc::new(JsonUserSource::from_records(users)),
        Arc::new(klaviyo_client(server)),
    )
}

/// Live "Updated User" envelope for `user`, stamped now.
pub fn update_envelope(user: &UserRecord) -> EventEnvelope {
    EventDispatcher::build_envelope_at(user, "WordPress - Updated User", false, chrono::Utc::now())
        .expect("envelope should build")
}
