//! Bulk historical sync
//!
//! `run_bulk_sync_page` is the single-page host invocation. `run_bulk_sync`
//! plays the external caller, looping until a terminal status.

use std::time::Instant;

use tracing::info;
use usersync_domain::{BulkSyncPageReport, BulkSyncRequest, SyncCursor};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Process one page of users.
pub async fn run_bulk_sync_page(
    ctx: &AppContext,
    page: u32,
    page_size: u32,
    fields: &str,
    auth_token: &str,
) -> BulkSyncPageReport {
    let command_name = "bulk_sync::run_bulk_sync_page";
    let start = Instant::now();
    let request = BulkSyncRequest::new(page, page_size, fields, auth_token);

    let report = match ctx.bulk_controller().await {
        Ok(controller) => controller.run_page(&request).await,
        Err(err) => {
            info!(command = command_name, error_type = error_label(&err), "Bulk sync unavailable");
            BulkSyncPageReport::error(err.message())
        }
    };

    log_command_execution(command_name, &report.sync_status.to_string(), start.elapsed(), !report.is_error());
    report
}

/// Run every page from the first until the run finishes or fails.
///
/// `on_page` sees each report as it arrives.
pub async fn run_bulk_sync<F>(
    ctx: &AppContext,
    page_size: u32,
    fields: &str,
    auth_token: &str,
    mut on_page: F,
) -> SyncCursor
where
    F: FnMut(&BulkSyncPageReport),
{
    let mut cursor = SyncCursor::start(page_size);

    while let Some(request) = cursor.next_request(fields, auth_token) {
        let report =
            run_bulk_sync_page(ctx, request.page, request.page_size, &request.fields, &request.auth_token)
                .await;
        on_page(&report);
        cursor.advance(&report);
    }

    info!(
        status = %cursor.status,
        total_fetched = cursor.total_fetched,
        pages = cursor.page,
        "Bulk sync run ended"
    );
    cursor
}
