//! User record types
//!
//! Snapshots of the host user store. The sync engine never mutates them.

use serde::{Deserialize, Serialize};

/// A user as read from the host user store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    /// May be empty or syntactically invalid; the dispatcher skips such users
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub login: String,
    /// Assigned roles in host order, possibly empty
    #[serde(default)]
    pub roles: Vec<String>,
    /// Registration time as `YYYY-MM-DD HH:MM:SS`, no timezone
    pub registered: String,
}

/// One page of a user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPageQuery {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    /// Host-specific selector for which user fields to fetch
    pub fields: String,
}

impl UserPageQuery {
    pub fn new(page: u32, per_page: u32, fields: impl Into<String>) -> Self {
        Self { page, per_page, fields: fields.into() }
    }

    /// Number of records preceding this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.per_page as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_is_one_based() {
        assert_eq!(UserPageQuery::new(1, 50, "ID").offset(), 0);
        assert_eq!(UserPageQuery::new(3, 50, "ID").offset(), 100);
        assert_eq!(UserPageQuery::new(0, 50, "ID").offset(), 0);
    }

    #[test]
    fn missing_optional_fields_default() {
        let user: UserRecord = serde_json::from_str(
            r#"{"id": 7, "login": "seven", "registered": "2020-01-01 00:00:00"}"#,
        )
        .unwrap();
        assert!(user.email.is_empty());
        assert!(user.roles.is_empty());
    }
}
