//! User source backed by a JSON export of the host user table
//!
//! The file holds an array of user records. Listing order is file order,
//! which stands in for the host's stable listing order.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};
use usersync_core::UserSource;
use usersync_domain::constants::DEFAULT_FIELD_SELECTOR;
use usersync_domain::{Result, SyncError, UserPageQuery, UserRecord};

use crate::errors::InfraError;

#[derive(Debug, Clone, Default)]
pub struct JsonUserSource {
    users: Vec<UserRecord>,
}

impl JsonUserSource {
    pub fn from_records(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Load every user record from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
        let users: Vec<UserRecord> = serde_json::from_str(&contents).map_err(InfraError::from)?;
        info!(path = %path.display(), count = users.len(), "Loaded user export");
        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserSource for JsonUserSource {
    async fn get_by_id(&self, id: u64) -> Result<Option<UserRecord>> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn list_page(&self, query: &UserPageQuery) -> Result<Vec<UserRecord>> {
        if !query.fields.eq_ignore_ascii_case(DEFAULT_FIELD_SELECTOR)
            && !query.fields.eq_ignore_ascii_case("all")
        {
            return Err(SyncError::InvalidInput(format!(
                "unsupported field selector '{}'",
                query.fields
            )));
        }

        let page: Vec<UserRecord> = self
            .users
            .iter()
            .skip(query.offset())
            .take(query.per_page as usize)
            .cloned()
            .collect();
        debug!(page = query.page, per_page = query.per_page, returned = page.len(), "Listed users");
        Ok(page)
    }
}
