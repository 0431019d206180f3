//! Runtime configuration structures
//!
//! Loaded by `usersync_infra::config::loader` from the environment or from a
//! JSON/TOML file. Every section has defaults so partial files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PAGE_SIZE, KLAVIYO_API_REVISION, KLAVIYO_EVENTS_URL,
};

/// Top level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub klaviyo: KlaviyoConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Events API endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlaviyoConfig {
    pub events_url: String,
    pub revision: String,
    pub timeout_seconds: u64,
}

impl Default for KlaviyoConfig {
    fn default() -> Self {
        Self {
            events_url: KLAVIYO_EVENTS_URL.to_string(),
            revision: KLAVIYO_API_REVISION.to_string(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Bulk sync settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub page_size: u32,
    /// Shared token bulk invocations must present
    pub invocation_token: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, invocation_token: None }
    }
}

/// Logging sink settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
