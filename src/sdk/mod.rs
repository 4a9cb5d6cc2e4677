//! Usage: FacebookSdk trait definition - the seam between the bridge and the native SDK.
//!
//! The real implementation wraps the vendor SDK (token store, interactive
//! login UI, graph queries, app-event logging); tests substitute a recording
//! mock. The bridge never reimplements any of this, it only translates.

use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

/// Snapshot of the SDK-held access token. Read-only to the bridge; never
/// cached here, queried on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub user_id: String,
    /// String-encoded expiration timestamp, passed through to the host as-is.
    pub expires_at: String,
}

/// Structured error reported by the graph service itself, as opposed to a
/// local SDK exception (which carries a message only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphRequestError {
    pub error_type: Option<String>,
    pub message: Option<String>,
    pub recovery_message: Option<String>,
    pub user_message: Option<String>,
    pub user_title: Option<String>,
    pub code: i64,
}

/// Completion of a `/me` graph query: a raw profile document, a provider
/// error, or (degenerate) neither.
#[derive(Debug, Clone, Default)]
pub struct GraphResponse {
    pub profile: Option<Value>,
    pub error: Option<GraphRequestError>,
}

/// One analytics parameter value after translation. Numbers are always
/// doubles; nested maps stay nested; lists are rejected before reaching the
/// SDK (see `bridge::event_params`).
#[derive(Debug, Clone, PartialEq)]
pub enum EventParam {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Nested(EventParams),
}

pub type EventParams = BTreeMap<String, EventParam>;

/// The native SDK surface consumed by the bridge.
///
/// Object-safe; the one asynchronous operation returns a boxed future so the
/// trait can be held behind `&dyn FacebookSdk` as well as a concrete type.
/// Login results are not delivered through this trait: the host wires the
/// SDK's success/cancel/error events to the bridge's `on_login_*` handlers.
pub trait FacebookSdk: Send + Sync {
    /// One-time SDK initialization against the host application context.
    fn initialize(&self);

    /// The currently stored access token, if any.
    fn current_access_token(&self) -> Option<AccessToken>;

    /// Begins the interactive login flow for the given read permissions.
    /// Completion arrives later through the bridge's event handlers.
    fn log_in_with_permissions(&self, permissions: &[String]);

    /// Clears the SDK's session. Assumed unconditional and local.
    fn log_out(&self);

    /// Issues a `/me` graph query for the given field list.
    fn graph_me_request(
        &self,
        token: &str,
        fields: &str,
    ) -> Pin<Box<dyn Future<Output = GraphResponse> + Send + '_>>;

    /// Forwards one analytics event with already-translated parameters.
    fn log_app_event(&self, name: &str, value_to_sum: f64, parameters: Option<&EventParams>);

    /// Host activity-result hook, forwarded verbatim. The return value
    /// indicates whether the SDK consumed the result.
    fn on_activity_result(&self, request_code: i32, result_code: i32, data: Option<&Value>)
        -> bool;
}
