//! Port interface for the host settings store

use std::collections::HashMap;

use async_trait::async_trait;
use usersync_domain::Result;

/// Key/value settings persistence
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Snapshot of every stored setting
    async fn all(&self) -> Result<HashMap<String, String>>;

    /// Replace the stored settings wholesale
    async fn replace(&self, values: HashMap<String, String>) -> Result<()>;
}
