//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Probes multiple paths for a config file (JSON or TOML)
//! 2. Starts from that file, or from the defaults when no file exists
//! 3. Overlays any `USERSYNC_*` environment variables that are set
//!
//! A config file that exists but does not parse is an error, never a
//! silent fallback to defaults.
//!
//! ## Environment Variables
//! All optional:
//! - `USERSYNC_KLAVIYO_EVENTS_URL`: Events API endpoint
//! - `USERSYNC_KLAVIYO_REVISION`: API revision header value
//! - `USERSYNC_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `USERSYNC_PAGE_SIZE`: Default bulk sync page size
//! - `USERSYNC_INVOCATION_TOKEN`: Shared token for bulk invocations
//! - `USERSYNC_LOG_LEVEL`: Default log filter
//! - `USERSYNC_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./usersync.json` or `./usersync.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use usersync_domain::{Config, Result, SyncError};

const ENV_EVENTS_URL: &str = "USERSYNC_KLAVIYO_EVENTS_URL";
const ENV_REVISION: &str = "USERSYNC_KLAVIYO_REVISION";
const ENV_TIMEOUT: &str = "USERSYNC_HTTP_TIMEOUT_SECS";
const ENV_PAGE_SIZE: &str = "USERSYNC_PAGE_SIZE";
const ENV_INVOCATION_TOKEN: &str = "USERSYNC_INVOCATION_TOKEN";
const ENV_LOG_LEVEL: &str = "USERSYNC_LOG_LEVEL";
const ENV_LOG_JSON: &str = "USERSYNC_LOG_JSON";

/// Load configuration from the probed config file (if any) overlaid with
/// environment variables.
///
/// # Errors
/// Returns `SyncError::Config` if a probed file cannot be read or parsed,
/// or if a numeric environment variable does not parse.
pub fn load() -> Result<Config> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(base)
}

/// Load configuration from environment variables over the defaults
///
/// Every variable is optional; unset ones keep the values of
/// [`Config::default`].
///
/// # Errors
/// Returns `SyncError::Config` if a numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    apply_env_overrides(Config::default())
}

/// Overlay the `USERSYNC_*` variables that are set onto `config`.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(url) = env_string(ENV_EVENTS_URL) {
        config.klaviyo.events_url = url;
    }
    if let Some(revision) = env_string(ENV_REVISION) {
        config.klaviyo.revision = revision;
    }
    config.klaviyo.timeout_seconds = env_parse(ENV_TIMEOUT, config.klaviyo.timeout_seconds)?;
    config.sync.page_size = env_parse(ENV_PAGE_SIZE, config.sync.page_size)?;
    if let Some(token) = env_string(ENV_INVOCATION_TOKEN) {
        config.sync.invocation_token = Some(token);
    }
    if let Some(level) = env_string(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SyncError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SyncError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SyncError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(config_candidates(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(config_candidates(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn config_candidates(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("usersync.json"),
        dir.join("usersync.toml"),
    ]
}

/// Non-empty environment variable, if set
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional numeric environment variable
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| SyncError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
