//! Bulk sync cursor and per-page report types
//!
//! The controller is stateless between invocations; the caller keeps a
//! [`SyncCursor`] and feeds `next_paged` back in until a terminal status.

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Progress of a bulk sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Processing,
    Finished,
    Error,
}

impl_domain_status_conversions!(SyncStatus {
    Processing => "processing",
    Finished => "finished",
    Error => "error",
});

impl SyncStatus {
    /// `finished` and `error` end a run
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing)
    }
}

/// Outcome of the invocation itself, independent of run progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

impl_domain_status_conversions!(ReportStatus {
    Success => "success",
    Error => "error",
});

/// Input of one bulk sync invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSyncRequest {
    pub page: u32,
    pub page_size: u32,
    pub fields: String,
    pub auth_token: String,
}

impl BulkSyncRequest {
    pub fn new(
        page: u32,
        page_size: u32,
        fields: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self { page, page_size, fields: fields.into(), auth_token: auth_token.into() }
    }
}

/// What one invocation reports back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSyncPageReport {
    pub status: ReportStatus,
    /// Ids of the users fetched for this page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<u64>,
    pub sync_status: SyncStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_paged: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl BulkSyncPageReport {
    pub fn success(users: Vec<u64>, sync_status: SyncStatus, next_paged: u32) -> Self {
        Self {
            status: ReportStatus::Success,
            users,
            sync_status,
            next_paged: Some(next_paged),
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ReportStatus::Error,
            users: Vec::new(),
            sync_status: SyncStatus::Error,
            next_paged: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ReportStatus::Error
    }
}

/// Caller-side pagination state for a bulk sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCursor {
    pub page: u32,
    pub page_size: u32,
    pub total_fetched: u64,
    pub status: SyncStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl SyncCursor {
    /// A fresh run starting at page 1
    pub fn start(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_fetched: 0,
            status: SyncStatus::Processing,
            last_error: None,
        }
    }

    /// Fold one page report into the cursor.
    pub fn advance(&mut self, report: &BulkSyncPageReport) {
        if report.is_error() {
            self.status = SyncStatus::Error;
            self.last_error = report.error_message.clone();
            return;
        }

        self.total_fetched += report.users.len() as u64;
        self.status = report.sync_status;
        if let Some(next) = report.next_paged {
            self.page = next;
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The request for the cursor's current page, or `None` once terminal.
    pub fn next_request(&self, fields: &str, auth_token: &str) -> Option<BulkSyncRequest> {
        if self.is_terminal() {
            return None;
        }
        Some(BulkSyncRequest::new(self.page, self.page_size, fields, auth_token))
    }
}
