//! Klaviyo event payload types
//!
//! Field names match the events API wire format exactly; the envelope
//! serializes to `{"data":{"type":"event","attributes":{...}}}`.

use serde::{Deserialize, Serialize};

/// Profile attributes derived one-to-one from a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperties {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub wordpress_user_id: u64,
    pub wordpress_user_login: String,
    /// First role, or the "No role set" sentinel; never null
    pub wordpress_user_role: String,
    pub wordpress_user_registered: String,
    /// Absent for historical events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordpress_user_last_updated: Option<String>,
}

/// The "what changed" subset attached to the event itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProperties {
    pub updated_wordpress_user_role: String,
    pub updated_first_name: String,
    pub updated_last_name: String,
}

/// Metric reference by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttributes {
    pub profile: ProfileProperties,
    pub metric: Metric,
    pub properties: EventProperties,
    /// ISO-8601 instant, present only for historical events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: EventAttributes,
}

/// Wire-level request body for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub data: EventData,
}

impl EventEnvelope {
    /// Type tag the events API expects
    pub const KIND: &'static str = "event";

    pub fn new(
        profile: ProfileProperties,
        metric_name: impl Into<String>,
        properties: EventProperties,
        time: Option<String>,
    ) -> Self {
        Self {
            data: EventData {
                kind: Self::KIND.to_string(),
                attributes: EventAttributes {
                    profile,
                    metric: Metric { name: metric_name.into() },
                    properties,
                    time,
                },
            },
        }
    }

    pub fn attributes(&self) -> &EventAttributes {
        &self.data.attributes
    }

    pub fn metric_name(&self) -> &str {
        &self.data.attributes.metric.name
    }

    pub fn is_historical(&self) -> bool {
        self.data.attributes.time.is_some()
    }
}

/// Result of one dispatch attempt as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The events API accepted the envelope
    Sent { response_body: String },
    /// The user had no usable email; nothing was sent
    Skipped { user_id: u64 },
    /// The attempt failed and was logged
    Failed { message: String },
    /// User sync is switched off in settings
    Disabled,
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}
