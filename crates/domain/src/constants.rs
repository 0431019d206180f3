//! Application constants
//!
//! Centralized location for the wire-level constants shared by the sync
//! engine and its adapters.

// Klaviyo events API
pub const KLAVIYO_EVENTS_URL: &str = "https://a.klaviyo.com/api/events/";
pub const KLAVIYO_API_REVISION: &str = "2023-02-22";
pub const KLAVIYO_AUTH_SCHEME: &str = "Klaviyo-API-Key";
pub const KLAVIYO_ONSITE_SCRIPT_URL: &str = "https://static.klaviyo.com/onsite/js/klaviyo.js";
/// The only status code the events API uses to accept an event
pub const ACCEPTED_STATUS: u16 = 202;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// Metric names
pub const EVENT_CREATED_USER: &str = "WordPress - Created User";
pub const EVENT_UPDATED_USER: &str = "WordPress - Updated User";

// Payload rules
pub const NO_ROLE_SENTINEL: &str = "No role set";
/// Format of the host's registration and last-updated timestamps
pub const USER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Settings keys
pub const SETTING_PUBLIC_KEY: &str = "klaviyo_public_key";
pub const SETTING_PRIVATE_KEY: &str = "klaviyo_private_key";
pub const SETTING_INJECT_SCRIPT: &str = "inject_klaviyo_script";
pub const SETTING_ACTIVATE_SYNC: &str = "activate_user_sync";
pub const ACCEPTED_SETTINGS: [&str; 4] =
    [SETTING_PUBLIC_KEY, SETTING_PRIVATE_KEY, SETTING_INJECT_SCRIPT, SETTING_ACTIVATE_SYNC];
pub const PUBLIC_KEY_LENGTH: usize = 6;
pub const PRIVATE_KEY_MIN_LENGTH: usize = 12;

// Bulk sync
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_FIELD_SELECTOR: &str = "ID";
pub const MISSING_TOKEN_MESSAGE: &str = "Missing Nonce token!";
