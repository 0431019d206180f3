//! Port interfaces for the host user store
//!
//! The sync engine only reads users; it never writes back to the host.

use async_trait::async_trait;
use usersync_domain::{Result, UserPageQuery, UserRecord};

/// Read access to the host's user records
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Get a user by ID, `None` when no such user exists
    async fn get_by_id(&self, id: u64) -> Result<Option<UserRecord>>;

    /// List one page of users in the host's stable listing order
    async fn list_page(&self, query: &UserPageQuery) -> Result<Vec<UserRecord>>;
}
