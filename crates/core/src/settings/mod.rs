//! Plugin settings: storage boundary and validation rules

pub mod ports;
pub mod service;

pub use service::{validate_settings, SettingsSaveResult, SettingsService};
