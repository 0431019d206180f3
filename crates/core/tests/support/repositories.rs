//! Mock port implementations for testing
//!
//! Every mock records what it was asked so tests can assert on side effects.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use usersync_core::{EventTransport, InvocationAuthorizer, SettingsStore, UserSource};
use usersync_domain::{EventEnvelope, Result as DomainResult, SyncError, UserPageQuery, UserRecord};

/// In-memory `UserSource` over a fixed, ordered list of users.
#[derive(Default, Clone)]
pub struct MockUserSource {
    users: Arc<Vec<UserRecord>>,
    queries: Arc<Mutex<Vec<UserPageQuery>>>,
}

impl MockUserSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users: Arc::new(users), queries: Arc::default() }
    }

    pub fn queries(&self) -> Vec<UserPageQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl UserSource for MockUserSource {
    async fn get_by_id(&self, id: u64) -> DomainResult<Option<UserRecord>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_page(&self, query: &UserPageQuery) -> DomainResult<Vec<UserRecord>> {
        self.queries.lock().push(query.clone());
        Ok(self
            .users
            .iter()
            .skip(query.offset())
            .take(query.per_page as usize)
            .cloned()
            .collect())
    }
}

/// `EventTransport` that records envelopes and replays scripted responses.
///
/// Once the script runs out every send succeeds with an empty body.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<EventEnvelope>>>,
    script: Arc<Mutex<VecDeque<DomainResult<String>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next send.
    pub fn then(self, response: DomainResult<String>) -> Self {
        self.script.lock().push_back(response);
        self
    }

    pub fn fail_with(self, error: SyncError) -> Self {
        self.then(Err(error))
    }

    pub fn sent(&self) -> Vec<EventEnvelope> {
        self.sent.lock().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl EventTransport for RecordingTransport {
    async fn send(&self, envelope: &EventEnvelope) -> DomainResult<String> {
        self.sent.lock().push(envelope.clone());
        self.script.lock().pop_front().unwrap_or_else(|| Ok(String::new()))
    }
}

/// Authorizer accepting a single token.
pub struct FixedTokenAuthorizer(pub &'static str);

impl InvocationAuthorizer for FixedTokenAuthorizer {
    fn authorize(&self, token: &str) -> bool {
        !token.is_empty() && token == self.0
    }
}

/// In-memory `SettingsStore`.
#[derive(Default, Clone)]
pub struct MemorySettingsStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySettingsStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .extend(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        store
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.values.lock().clone()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn all(&self) -> DomainResult<HashMap<String, String>> {
        Ok(self.snapshot())
    }

    async fn replace(&self, values: HashMap<String, String>) -> DomainResult<()> {
        *self.values.lock() = values;
        Ok(())
    }
}
