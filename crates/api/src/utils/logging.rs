use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use usersync_domain::{LoggingConfig, SyncError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` when a
/// subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    installed.is_ok()
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"hooks::on_user_created"`).
/// * `outcome` - Short outcome label (`"sent"`, `"skipped"`, `"error"`...).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding sensitive values in `command` or `outcome`.
#[inline]
pub fn log_command_execution(command: &str, outcome: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, outcome, duration_ms, "command_execution_success");
    } else {
        warn!(command, outcome, duration_ms, "command_execution_failure");
    }
}

/// Convert a `SyncError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SyncError) -> &'static str {
    error.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&SyncError::Delivery("x".into())), "delivery");
        assert_eq!(error_label(&SyncError::Auth("x".into())), "auth");
        assert_eq!(error_label(&SyncError::Config("x".into())), "config");
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
