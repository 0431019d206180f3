//! Settings service
//!
//! Saving mirrors the host settings screen: unknown keys are dropped, the
//! remaining input is validated, and the sanitized input is persisted
//! whether or not validation passed.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use usersync_common::{StringValidator, ValidationError, ValidationResult, Validator};
use usersync_domain::constants::{
    ACCEPTED_SETTINGS, KLAVIYO_ONSITE_SCRIPT_URL, PRIVATE_KEY_MIN_LENGTH, PUBLIC_KEY_LENGTH,
    SETTING_PRIVATE_KEY, SETTING_PUBLIC_KEY,
};
use usersync_domain::{Credentials, PluginSettings, Result};

use super::ports::SettingsStore;

const SETTINGS_UPDATED: &str = "Settings updated!";

/// What the settings screen shows after a save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SettingsSaveResult {
    Updated { notice: String },
    Rejected { errors: ValidationError },
}

impl SettingsSaveResult {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Keep only the accepted setting keys.
pub fn sanitize_settings(inputs: &HashMap<String, String>) -> HashMap<String, String> {
    ACCEPTED_SETTINGS
        .iter()
        .filter_map(|key| inputs.get(*key).map(|value| ((*key).to_string(), value.clone())))
        .collect()
}

/// Validate the key fields that are present in `inputs`.
///
/// Lengths are checked on the raw value; absent keys are not validated.
pub fn validate_settings(inputs: &HashMap<String, String>) -> ValidationResult<()> {
    let mut validator = Validator::new();
    let not_empty = StringValidator::new().not_empty().trim(false);

    if let Some(public_key) = inputs.get(SETTING_PUBLIC_KEY) {
        if public_key.is_empty() {
            validator.validate_field_with_message(
                SETTING_PUBLIC_KEY,
                public_key,
                &not_empty,
                "You need to enter your Klaviyo Public key",
            );
        } else {
            validator.validate_field_with_message(
                SETTING_PUBLIC_KEY,
                public_key,
                &StringValidator::new().exact_length(PUBLIC_KEY_LENGTH).trim(false),
                "Your Klaviyo Public Key should be 6 characters long",
            );
        }
    }

    if let Some(private_key) = inputs.get(SETTING_PRIVATE_KEY) {
        if private_key.is_empty() {
            validator.validate_field_with_message(
                SETTING_PRIVATE_KEY,
                private_key,
                &not_empty,
                "You need to enter your Klaviyo Private key",
            );
        } else {
            validator.validate_field_with_message(
                SETTING_PRIVATE_KEY,
                private_key,
                &StringValidator::new().min_length(PRIVATE_KEY_MIN_LENGTH).trim(false),
                "Your Klaviyo Private Key should be longer",
            );
        }
    }

    validator.finalize()
}

/// Reads and writes plugin settings through a [`SettingsStore`]
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Sanitize, validate and persist settings input.
    #[instrument(skip_all, fields(keys = inputs.len()))]
    pub async fn save(&self, inputs: &HashMap<String, String>) -> Result<SettingsSaveResult> {
        let sanitized = sanitize_settings(inputs);
        let validation = validate_settings(&sanitized);

        self.store.replace(sanitized).await?;

        match validation {
            Ok(()) => {
                info!("Settings updated");
                Ok(SettingsSaveResult::Updated { notice: SETTINGS_UPDATED.to_string() })
            }
            Err(errors) => {
                warn!(error_count = errors.error_count(), "Settings saved with validation errors");
                Ok(SettingsSaveResult::Rejected { errors })
            }
        }
    }

    pub async fn load(&self) -> Result<PluginSettings> {
        let values = self.store.all().await?;
        Ok(PluginSettings::from_map(&values))
    }

    /// Credentials for the events transport
    pub async fn credentials(&self) -> Result<Credentials> {
        Ok(self.load().await?.credentials())
    }

    pub async fn is_sync_active(&self) -> Result<bool> {
        Ok(self.load().await?.activate_user_sync.is_on())
    }

    /// The Klaviyo on-site script tag, when injection is on and a public key is set.
    pub async fn onsite_script_tag(&self) -> Result<Option<String>> {
        let settings = self.load().await?;
        if !settings.inject_klaviyo_script.is_on() {
            return Ok(None);
        }

        let Some(public_key) =
            settings.klaviyo_public_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
        else {
            debug!("Script injection is on but no public key is set");
            return Ok(None);
        };

        Ok(Some(format!(
            r#"<script async type="text/javascript" src="{KLAVIYO_ONSITE_SCRIPT_URL}?company_id={public_key}"></script>"#
        )))
    }
}
