//! Plugin settings and the credentials derived from them

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    SETTING_ACTIVATE_SYNC, SETTING_INJECT_SCRIPT, SETTING_PRIVATE_KEY, SETTING_PUBLIC_KEY,
};
use crate::impl_domain_status_conversions;

/// An on/off switch as stored by the host settings screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    On,
    #[default]
    Off,
}

impl_domain_status_conversions!(Toggle {
    On => "on",
    Off => "off",
});

impl Toggle {
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Anything other than `on` counts as off.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("on") => Self::On,
            _ => Self::Off,
        }
    }
}

/// The four accepted plugin settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub klaviyo_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub klaviyo_private_key: Option<String>,
    #[serde(default)]
    pub inject_klaviyo_script: Toggle,
    #[serde(default)]
    pub activate_user_sync: Toggle,
}

impl PluginSettings {
    /// Build from raw key/value pairs, ignoring unknown keys.
    pub fn from_map(values: &HashMap<String, String>) -> Self {
        Self {
            klaviyo_public_key: values.get(SETTING_PUBLIC_KEY).cloned(),
            klaviyo_private_key: values.get(SETTING_PRIVATE_KEY).cloned(),
            inject_klaviyo_script: Toggle::from_setting(
                values.get(SETTING_INJECT_SCRIPT).map(String::as_str),
            ),
            activate_user_sync: Toggle::from_setting(
                values.get(SETTING_ACTIVATE_SYNC).map(String::as_str),
            ),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.klaviyo_private_key.clone())
    }
}

/// Credentials injected into the events transport
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    private_key: Option<String>,
}

impl Credentials {
    pub fn new(private_key: Option<String>) -> Self {
        Self { private_key }
    }

    /// The private key, if one is configured and not blank
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("private_key", &self.private_key().map(|_| "<redacted>"))
            .finish()
    }
}
