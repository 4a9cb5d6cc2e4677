//! Usage: LoginBridge - serializes login/logout requests into at most one
//! pending host callback and translates SDK events into the callback contract.
//!
//! Every host result is delivered as a single `(error, result)` callback
//! invocation: success payloads travel in the second argument, error and
//! cancel payloads in the first. The pending slot is consumed the instant a
//! result-producing event fires; events with no pending slot are no-ops.

pub mod event_params;
pub mod payload;

use crate::sdk::{AccessToken, FacebookSdk};
use crate::shared::error::AppResult;
use crate::shared::mutex_ext::MutexExt;
use self::payload::{
    CallbackKind, CurrentAccessToken, EVENT_CANCEL, EVENT_ERROR, EVENT_LOGOUT,
    EVENT_PERMISSIONS_MISSING, PERMISSION_EMAIL, PROFILE_FIELDS, PROVIDER,
};
use serde_json::{Map, Value};
use std::sync::Mutex;

/// Host registration name of the bridge module.
pub const MODULE_NAME: &str = "FBLoginManager";

/// Completion handler supplied by the host for one logical request.
///
/// `Fn` rather than `FnOnce`: the concurrent-request short-circuit invokes a
/// callback synchronously and then stores the same callback as the pending
/// slot, so one callback object can fire across two logical requests.
/// Single-shot delivery per slot is enforced by taking the slot.
pub type BridgeCallback = Box<dyn Fn(Option<Value>, Option<Value>) + Send>;

/// The bridge. Owns the external SDK handle and the single pending slot;
/// holds no other state.
pub struct LoginBridge<S> {
    sdk: S,
    pending: Mutex<Option<BridgeCallback>>,
}

impl<S: FacebookSdk> LoginBridge<S> {
    /// Initializes the SDK and returns a bridge with an empty pending slot.
    pub fn new(sdk: S) -> Self {
        sdk.initialize();
        Self {
            sdk,
            pending: Mutex::new(None),
        }
    }

    /// The wrapped SDK handle.
    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Begins an interactive login for the given permission entries.
    ///
    /// Non-string entries are dropped silently. The filtered set must be
    /// non-empty and contain the `email` scope, otherwise the request fails
    /// immediately with `onPermissionsMissing` and the SDK is never asked.
    ///
    /// If a callback is already pending from an earlier request, this call
    /// short-circuits synchronously through its own `callback` argument:
    /// a cache-hit success when the SDK already holds a token, a cancel
    /// otherwise. The stale slot is not invoked; the unconditional overwrite
    /// below abandons it (see DESIGN.md, preserved quirk).
    pub fn login_with_permissions(&self, permissions: &[Value], callback: BridgeCallback) {
        if self.has_pending() {
            match self.sdk.current_access_token() {
                Some(token) => {
                    tracing::warn!("login requested while one is pending, replaying cached token");
                    deliver(
                        &callback,
                        CallbackKind::Success,
                        payload::cached_login_payload(&token),
                    );
                }
                None => {
                    tracing::warn!("login requested while one is pending and no token is cached");
                    deliver(
                        &callback,
                        CallbackKind::Cancel,
                        payload::message_payload("Cannot register multiple callbacks", EVENT_CANCEL),
                    );
                }
            }
        }

        *self.pending.lock_or_recover() = Some(callback);

        let permissions = filter_permissions(permissions);
        if !permissions.is_empty() && permissions.iter().any(|p| p == PERMISSION_EMAIL) {
            tracing::info!(permissions = ?permissions, "starting interactive facebook login");
            self.sdk.log_in_with_permissions(&permissions);
        } else {
            self.handle_insufficient_permissions();
        }
    }

    /// Signs out of the SDK and synchronously reports success. Logout is
    /// assumed unconditional and local; there is no asynchronous wait.
    pub fn logout(&self, callback: BridgeCallback) {
        *self.pending.lock_or_recover() = Some(callback);
        self.sdk.log_out();
        self.consume_callback(
            CallbackKind::Success,
            payload::message_payload("Facebook Logout executed", EVENT_LOGOUT),
        );
    }

    /// SDK login-success event. Requires the `email` scope among the recently
    /// granted permissions, then enriches the result with one `/me` graph
    /// round trip before consuming the pending slot. If the slot is already
    /// empty when the round trip completes, the profile is discarded.
    pub async fn on_login_success(&self, granted_permissions: &[String], token: &AccessToken) {
        if !granted_permissions.iter().any(|p| p == PERMISSION_EMAIL) {
            self.handle_insufficient_permissions();
            return;
        }

        let response = self.sdk.graph_me_request(&token.token, PROFILE_FIELDS).await;
        if !self.has_pending() {
            tracing::warn!("graph profile response discarded: no callback pending");
            return;
        }

        match response.error {
            Some(error) => {
                self.consume_callback(CallbackKind::Error, payload::graph_error_payload(&error));
            }
            None => {
                let profile = response.profile.unwrap_or(Value::Null);
                self.consume_callback(
                    CallbackKind::Success,
                    payload::login_payload(token, &profile),
                );
            }
        }
    }

    /// SDK cancel event (user backed out of the login UI). No-op when
    /// nothing is pending.
    pub fn on_login_cancel(&self) {
        if !self.has_pending() {
            return;
        }
        self.consume_callback(
            CallbackKind::Cancel,
            payload::message_payload("FacebookCallback onCancel event triggered", EVENT_CANCEL),
        );
    }

    /// SDK error event (local SDK exception). Carries the message only, no
    /// structured fields. No-op when nothing is pending.
    pub fn on_login_error(&self, message: &str) {
        if !self.has_pending() {
            return;
        }
        self.consume_callback(
            CallbackKind::Error,
            payload::message_payload(message, EVENT_ERROR),
        );
    }

    /// The SDK's current token string, or `""` when logged out. Stateless;
    /// never touches the pending slot.
    pub fn current_token(&self) -> String {
        self.sdk
            .current_access_token()
            .map(|token| token.token)
            .unwrap_or_default()
    }

    /// The SDK's current token as the host-facing `{tokenString, userID}`
    /// pair, or `None` when logged out. Stateless.
    pub fn current_access_token(&self) -> Option<CurrentAccessToken> {
        self.sdk
            .current_access_token()
            .map(|token| CurrentAccessToken {
                token_string: token.token,
                user_id: token.user_id,
            })
    }

    /// Translates and forwards one analytics event. Fire-and-forget for the
    /// host; translation failures (nested lists) surface as errors rather
    /// than being dropped.
    pub fn log_event(&self, name: &str, value_to_sum: f64, parameters: &Value) -> AppResult<()> {
        let parameters = event_params::from_json(parameters)?;
        self.sdk.log_app_event(name, value_to_sum, parameters.as_ref());
        Ok(())
    }

    /// Forwards the host's activity-result hook to the SDK. Returns whether
    /// the SDK consumed the result.
    pub fn handle_activity_result(
        &self,
        request_code: i32,
        result_code: i32,
        data: Option<&Value>,
    ) -> bool {
        self.sdk.on_activity_result(request_code, result_code, data)
    }

    fn handle_insufficient_permissions(&self) {
        self.consume_callback(
            CallbackKind::Error,
            payload::message_payload("Insufficient permissions", EVENT_PERMISSIONS_MISSING),
        );
    }

    /// Takes the pending slot and delivers through it. No-op when empty:
    /// the event that raced here is silently discarded by contract.
    fn consume_callback(&self, kind: CallbackKind, map: Map<String, Value>) {
        let Some(callback) = self.pending.lock_or_recover().take() else {
            return;
        };
        deliver(&callback, kind, map);
    }

    fn has_pending(&self) -> bool {
        self.pending.lock_or_recover().is_some()
    }
}

/// Stamps the `type` and `provider` tags and invokes the callback with the
/// payload in the argument slot its kind dictates.
fn deliver(callback: &BridgeCallback, kind: CallbackKind, mut map: Map<String, Value>) {
    map.insert("type".into(), kind.as_str().into());
    map.insert("provider".into(), PROVIDER.into());
    let body = Value::Object(map);
    match kind {
        CallbackKind::Success => callback(None, Some(body)),
        CallbackKind::Error | CallbackKind::Cancel => callback(Some(body), None),
    }
}

/// Keeps string entries only; everything else is dropped without erroring.
fn filter_permissions(permissions: &[Value]) -> Vec<String> {
    permissions
        .iter()
        .filter_map(|entry| entry.as_str().map(str::to_string))
        .collect()
}
