//! Usage: Callback payload construction - the value-translation contract.
//!
//! Every payload delivered to the host carries a `type` discriminator
//! (`success|error|cancel`), the fixed `provider` tag, and an `eventName`.
//! Field names and message strings are part of the compatibility contract
//! and must not drift.

use crate::sdk::{AccessToken, GraphRequestError};
use serde_json::{Map, Value};

/// Fixed provider tag stamped on every payload.
pub(crate) const PROVIDER: &str = "facebook";

/// The permission scope that unlocks the profile-enrichment round trip.
/// Login without it is rejected before the SDK is asked anything.
pub(crate) const PERMISSION_EMAIL: &str = "email";

/// Field list for the `/me` profile-enrichment graph query.
pub(crate) const PROFILE_FIELDS: &str = "id,name,email,first_name,last_name,\
age_range,link,picture,gender,locale,timezone,updated_time,verified";

pub(crate) const EVENT_LOGIN: &str = "onLogin";
pub(crate) const EVENT_ERROR: &str = "onError";
pub(crate) const EVENT_CANCEL: &str = "onCancel";
pub(crate) const EVENT_PERMISSIONS_MISSING: &str = "onPermissionsMissing";
pub(crate) const EVENT_LOGIN_FOUND: &str = "onLoginFound";
pub(crate) const EVENT_LOGOUT: &str = "onLogout";

/// Which of the two callback arguments a payload travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackKind {
    Success,
    Error,
    Cancel,
}

impl CallbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Cancel => "cancel",
        }
    }
}

/// Host-facing shape for `current_access_token`. Field names match the
/// original bridge surface, not Rust conventions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CurrentAccessToken {
    #[serde(rename = "tokenString")]
    pub token_string: String,
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Payload carrying only a message and an event name (cancel, logout,
/// local errors).
pub(crate) fn message_payload(message: &str, event_name: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("message".into(), message.into());
    map.insert("eventName".into(), event_name.into());
    map
}

/// Full login success: token, string-encoded expiration, and the raw profile
/// document serialized as a string (the host parses it, not this module).
pub(crate) fn login_payload(token: &AccessToken, profile: &Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("token".into(), token.token.clone().into());
    map.insert("expiration".into(), token.expires_at.clone().into());
    map.insert("profile".into(), profile.to_string().into());
    map.insert("eventName".into(), EVENT_LOGIN.into());
    map
}

/// Short-circuit success for a login issued while one was already pending
/// and a token is already present. No profile enrichment on this path.
pub(crate) fn cached_login_payload(token: &AccessToken) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("token".into(), token.token.clone().into());
    map.insert("eventName".into(), EVENT_LOGIN_FOUND.into());
    map.insert("cache".into(), true.into());
    map
}

/// Provider-side graph error with the full structured field set. Absent
/// fields are serialized as JSON null, matching the original contract.
pub(crate) fn graph_error_payload(error: &GraphRequestError) -> Map<String, Value> {
    fn opt(value: &Option<String>) -> Value {
        value.clone().map(Value::String).unwrap_or(Value::Null)
    }

    let mut map = Map::new();
    map.insert("errorType".into(), opt(&error.error_type));
    map.insert("message".into(), opt(&error.message));
    map.insert("recoveryMessage".into(), opt(&error.recovery_message));
    map.insert("userMessage".into(), opt(&error.user_message));
    map.insert("userTitle".into(), opt(&error.user_title));
    map.insert("code".into(), error.code.into());
    map.insert("eventName".into(), EVENT_ERROR.into());
    map
}
