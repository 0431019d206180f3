//! Shared test helpers for `usersync-core` integration tests.
//!
//! In-memory mocks for every core port so tests can focus on behaviour
//! instead of boilerplate.

#![allow(dead_code)]

pub mod repositories;

use usersync_domain::UserRecord;

/// A user with a valid email and one role, registered at a fixed instant.
pub fn user(id: u64) -> UserRecord {
    UserRecord {
        id,
        email: format!("user{id}@example.com"),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        login: format!("user{id}"),
        roles: vec!["subscriber".to_string()],
        registered: "2023-05-01 10:00:00".to_string(),
    }
}

/// `count` users with consecutive ids starting at `first_id`.
pub fn users(first_id: u64, count: u64) -> Vec<UserRecord> {
    (first_id..first_id + count).map(user).collect()
}
