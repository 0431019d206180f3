//! Bulk sync controller
//!
//! Processes exactly one page per invocation. The caller keeps a
//! `SyncCursor` and invokes again with `next_paged` until the report carries
//! a terminal `sync_status`.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use usersync_domain::constants::MISSING_TOKEN_MESSAGE;
use usersync_domain::{
    BulkSyncPageReport, BulkSyncRequest, Result, SyncError, SyncStatus, UserPageQuery,
};

use super::dispatcher::EventDispatcher;
use super::ports::InvocationAuthorizer;
use crate::user::ports::UserSource;

pub struct BulkSyncController {
    users: Arc<dyn UserSource>,
    dispatcher: Arc<EventDispatcher>,
    authorizer: Arc<dyn InvocationAuthorizer>,
}

impl BulkSyncController {
    pub fn new(
        users: Arc<dyn UserSource>,
        dispatcher: Arc<EventDispatcher>,
        authorizer: Arc<dyn InvocationAuthorizer>,
    ) -> Self {
        Self { users, dispatcher, authorizer }
    }

    /// Run one page and fold any failure into an error report.
    pub async fn run_page(&self, request: &BulkSyncRequest) -> BulkSyncPageReport {
        match self.process_page(request).await {
            Ok(report) => report,
            Err(err) => {
                warn!(
                    page = request.page,
                    error_type = err.label(),
                    error = %err.message(),
                    "Bulk sync page aborted"
                );
                BulkSyncPageReport::error(err.message())
            }
        }
    }

    /// Run one page.
    ///
    /// The first propagated dispatch error aborts the rest of the page.
    /// Users skipped for a bad email do not.
    #[instrument(skip(self, request), fields(page = request.page, page_size = request.page_size))]
    pub async fn process_page(&self, request: &BulkSyncRequest) -> Result<BulkSyncPageReport> {
        if !self.authorizer.authorize(&request.auth_token) {
            return Err(SyncError::Auth(MISSING_TOKEN_MESSAGE.to_string()));
        }
        if request.page == 0 {
            return Err(SyncError::InvalidInput("page must be at least 1".to_string()));
        }
        if request.page_size == 0 {
            return Err(SyncError::InvalidInput("page size must be at least 1".to_string()));
        }

        let query = UserPageQuery::new(request.page, request.page_size, request.fields.clone());
        let users = self.users.list_page(&query).await?;

        let mut sent = 0usize;
        for user in &users {
            let outcome = self.dispatcher.try_create_profile(user.id, true).await?;
            if outcome.is_sent() {
                sent += 1;
            }
        }

        let fetched = users.len();
        let sync_status = if fetched < request.page_size as usize {
            SyncStatus::Finished
        } else {
            SyncStatus::Processing
        };
        let next_paged = request.page.saturating_add(1);

        info!(fetched, sent, %sync_status, next_paged, "Bulk sync page complete");

        Ok(BulkSyncPageReport::success(
            users.iter().map(|u| u.id).collect(),
            sync_status,
            next_paged,
        ))
    }
}
