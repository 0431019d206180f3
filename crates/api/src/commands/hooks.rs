//! Live user hooks
//!
//! Failures never reach the host: they are logged and reported as
//! `DispatchOutcome::Failed`.

use std::time::Instant;

use tracing::{debug, info};
use usersync_domain::DispatchOutcome;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Runs after the host creates a user.
pub async fn on_user_created(ctx: &AppContext, user_id: u64) -> DispatchOutcome {
    run_hook(ctx, "hooks::on_user_created", user_id, false).await
}

/// Runs after the host updates a user's profile.
pub async fn on_user_updated(ctx: &AppContext, user_id: u64) -> DispatchOutcome {
    run_hook(ctx, "hooks::on_user_updated", user_id, true).await
}

async fn run_hook(
    ctx: &AppContext,
    command_name: &str,
    user_id: u64,
    is_update: bool,
) -> DispatchOutcome {
    let start = Instant::now();
    info!(command = command_name, user_id, "Executing user hook");

    let outcome = match ctx.settings.is_sync_active().await {
        Ok(false) => {
            debug!(command = command_name, user_id, "User sync is switched off");
            DispatchOutcome::Disabled
        }
        Ok(true) => match ctx.dispatcher().await {
            Ok(dispatcher) if is_update => dispatcher.update_profile(user_id).await,
            Ok(dispatcher) => dispatcher.create_profile(user_id, false).await,
            Err(err) => {
                info!(command = command_name, error_type = error_label(&err), "Dispatcher unavailable");
                DispatchOutcome::Failed { message: err.message().to_string() }
            }
        },
        Err(err) => DispatchOutcome::Failed { message: err.message().to_string() },
    };

    let label = match &outcome {
        DispatchOutcome::Sent { .. } => "sent",
        DispatchOutcome::Skipped { .. } => "skipped",
        DispatchOutcome::Failed { .. } => "failed",
        DispatchOutcome::Disabled => "disabled",
    };
    let success = !matches!(outcome, DispatchOutcome::Failed { .. });
    log_command_execution(command_name, label, start.elapsed(), success);

    outcome
}
