//! Shared fixtures for `usersync-app` integration tests.
//!
//! Builds a context over temp-file adapters with the events URL pointed at a
//! wiremock server.

#![allow(dead_code)]

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use usersync_domain::{Config, KlaviyoConfig, SyncConfig};
use usersync_lib::AppContext;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "nonce-123";
pub const PRIVATE_KEY: &str = "pk_0123456789abcdef";

/// A context plus the temp directory keeping its files alive.
pub struct TestApp {
    pub ctx: AppContext,
    pub server: MockServer,
    _dir: TempDir,
}

/// `count` users with ids `1..=count`; every user whose id is divisible by
/// `bad_email_every` (when non-zero) has an empty email.
pub fn user_export(count: u64, bad_email_every: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            let email = if bad_email_every != 0 && id % bad_email_every == 0 {
                String::new()
            } else {
                format!("user{id}@example.com")
            };
            json!({
                "id": id,
                "email": email,
                "first_name": "First",
                "last_name": "Last",
                "login": format!("user{id}"),
                "roles": ["subscriber"],
                "registered": "2023-05-01 10:00:00"
            })
        })
        .collect();
    json!(users)
}

fn write_json(path: &Path, value: &serde_json::Value) {
    std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

/// Build an app with the given users and stored settings.
pub async fn test_app(users: serde_json::Value, settings: serde_json::Value) -> TestApp {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let users_path = dir.path().join("users.json");
    let settings_path = dir.path().join("settings.json");
    write_json(&users_path, &users);
    write_json(&settings_path, &settings);

    let config = Config {
        klaviyo: KlaviyoConfig {
            events_url: format!("{}/api/events/", server.uri()),
            timeout_seconds: 2,
            ..KlaviyoConfig::default()
        },
        sync: SyncConfig { page_size: 50, invocation_token: Some(TOKEN.to_string()) },
        ..Config::default()
    };

    let ctx = AppContext::from_files(config, &users_path, &settings_path).unwrap();
    TestApp { ctx, server, _dir: dir }
}

pub fn active_settings() -> serde_json::Value {
    json!({
        "klaviyo_public_key": "AbC123",
        "klaviyo_private_key": PRIVATE_KEY,
        "activate_user_sync": "on",
        "inject_klaviyo_script": "off"
    })
}

/// Accept every event with `202`.
pub async fn accept_all(server: &MockServer) {
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(202)).mount(server).await;
}

pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or_default()
}
