//! Settings screen commands

use std::collections::HashMap;
use std::time::Instant;

use usersync_core::SettingsSaveResult;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Save settings input from the host settings screen.
///
/// Validation failures are a normal result; only store failures are errors.
pub async fn save_settings(
    ctx: &AppContext,
    inputs: &HashMap<String, String>,
) -> Result<SettingsSaveResult, String> {
    let command_name = "settings::save_settings";
    let start = Instant::now();

    let result = ctx.settings.save(inputs).await;

    let outcome = match &result {
        Ok(SettingsSaveResult::Updated { .. }) => "updated",
        Ok(SettingsSaveResult::Rejected { .. }) => "rejected",
        Err(err) => error_label(err),
    };
    log_command_execution(command_name, outcome, start.elapsed(), result.is_ok());

    result.map_err(|e| e.to_string())
}

/// The on-site script tag to inject into public pages, if enabled.
pub async fn onsite_script(ctx: &AppContext) -> Result<Option<String>, String> {
    let start = Instant::now();
    let result = ctx.settings.onsite_script_tag().await;

    let outcome = match &result {
        Ok(Some(_)) => "injected",
        Ok(None) => "none",
        Err(err) => error_label(err),
    };
    log_command_execution("settings::onsite_script", outcome, start.elapsed(), result.is_ok());

    result.map_err(|e| e.to_string())
}
