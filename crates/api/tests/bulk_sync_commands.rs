//! Bulk sync commands through the full stack

mod support;

use serde_json::json;
use support::{accept_all, active_settings, request_count, test_app, user_export, TOKEN};
use usersync_domain::{ReportStatus, SyncStatus};
use usersync_lib::commands::{run_bulk_sync, run_bulk_sync_page};
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn pages_report_processing_then_finished() {
    let app = test_app(user_export(60, 0), active_settings()).await;
    accept_all(&app.server).await;

    let first = run_bulk_sync_page(&app.ctx, 1, 50, "ID", TOKEN).await;
    assert_eq!(first.status, ReportStatus::Success);
    assert_eq!(first.sync_status, SyncStatus::Processing);
    assert_eq!(first.next_paged, Some(2));
    assert_eq!(first.users.len(), 50);

    let second = run_bulk_sync_page(&app.ctx, 2, 50, "ID", TOKEN).await;
    assert_eq!(second.sync_status, SyncStatus::Finished);
    assert_eq!(second.users.len(), 10);

    assert_eq!(request_count(&app.server).await, 60);
}

#[tokio::test]
async fn wrong_token_reports_missing_nonce() {
    let app = test_app(user_export(3, 0), active_settings()).await;
    accept_all(&app.server).await;

    let report = run_bulk_sync_page(&app.ctx, 1, 50, "ID", "forged").await;

    assert_eq!(report.status, ReportStatus::Error);
    assert_eq!(report.error_message.as_deref(), Some("Missing Nonce token!"));
    assert_eq!(request_count(&app.server).await, 0);
}

#[tokio::test]
async fn bulk_sync_ignores_activation_toggle() {
    let mut settings = active_settings();
    settings["activate_user_sync"] = json!("off");
    let app = test_app(user_export(3, 0), settings).await;
    accept_all(&app.server).await;

    let report = run_bulk_sync_page(&app.ctx, 1, 50, "ID", TOKEN).await;

    assert_eq!(report.status, ReportStatus::Success);
    assert_eq!(request_count(&app.server).await, 3);
}

#[tokio::test]
async fn rejection_aborts_page_with_message() {
    let app = test_app(user_export(5, 0), active_settings()).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"errors": [{"title": "Rate limited"}]})))
        .mount(&app.server)
        .await;

    let report = run_bulk_sync_page(&app.ctx, 1, 50, "ID", TOKEN).await;

    assert_eq!(report.sync_status, SyncStatus::Error);
    assert_eq!(report.error_message.as_deref(), Some("Error code: 500 Message: Rate limited"));
    assert_eq!(request_count(&app.server).await, 1);
}

#[tokio::test]
async fn full_run_skips_bad_emails_and_finishes() {
    let app = test_app(user_export(25, 5), active_settings()).await;
    accept_all(&app.server).await;
    let mut pages = 0;

    let cursor = run_bulk_sync(&app.ctx, 10, "ID", TOKEN, |_| pages += 1).await;

    assert_eq!(pages, 3);
    assert_eq!(cursor.status, SyncStatus::Finished);
    assert_eq!(cursor.total_fetched, 25);
    assert_eq!(request_count(&app.server).await, 20);
}

#[tokio::test]
async fn full_run_stops_on_error() {
    let app = test_app(user_export(25, 0), json!({"activate_user_sync": "on"})).await;
    accept_all(&app.server).await;

    let cursor = run_bulk_sync(&app.ctx, 10, "ID", TOKEN, |_| {}).await;

    assert_eq!(cursor.status, SyncStatus::Error);
    assert_eq!(cursor.page, 1);
    assert!(cursor.last_error.is_some());
    assert_eq!(request_count(&app.server).await, 0);
}
