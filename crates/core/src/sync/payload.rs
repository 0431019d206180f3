//! Pure transformation from a user record to event payload parts

use chrono::{DateTime, NaiveDateTime, Utc};
use usersync_domain::constants::{NO_ROLE_SENTINEL, USER_TIMESTAMP_FORMAT};
use usersync_domain::{EventProperties, ProfileProperties, Result, SyncError, UserRecord};

/// First role, or the "No role set" sentinel when the user has none.
pub fn role_or_sentinel(roles: &[String]) -> String {
    roles.first().map_or_else(|| NO_ROLE_SENTINEL.to_string(), Clone::clone)
}

/// Profile attributes stamped with the current UTC time.
pub fn build_profile_properties(user: &UserRecord) -> ProfileProperties {
    build_profile_properties_at(user, Utc::now())
}

/// Profile attributes stamped with `now`.
pub fn build_profile_properties_at(user: &UserRecord, now: DateTime<Utc>) -> ProfileProperties {
    ProfileProperties {
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        wordpress_user_id: user.id,
        wordpress_user_login: user.login.clone(),
        wordpress_user_role: role_or_sentinel(&user.roles),
        wordpress_user_registered: user.registered.clone(),
        wordpress_user_last_updated: Some(now.format(USER_TIMESTAMP_FORMAT).to_string()),
    }
}

pub fn build_event_properties(user: &UserRecord) -> EventProperties {
    EventProperties {
        updated_wordpress_user_role: role_or_sentinel(&user.roles),
        updated_first_name: user.first_name.clone(),
        updated_last_name: user.last_name.clone(),
    }
}

/// Convert a host registration timestamp to an RFC 3339 instant.
///
/// The host stores registration times in UTC without an offset, so the
/// result always carries `+00:00`.
pub fn registered_to_iso8601(raw: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(raw.trim(), USER_TIMESTAMP_FORMAT).map_err(|e| {
        SyncError::InvalidInput(format!("invalid registration timestamp '{raw}': {e}"))
    })?;
    Ok(parsed.and_utc().to_rfc3339())
}
