//! Usage: Facebook login bridge - adapts the native Facebook SDK's three-way
//! callback flow (success/cancel/error) into a single-callback-per-call host
//! surface, translating field names and error shapes along the way.
//!
//! The native SDK is an external collaborator behind the [`FacebookSdk`]
//! trait; this crate holds no state beyond the one pending callback slot.

pub mod bridge;
pub mod sdk;
mod shared;

pub use bridge::payload::{CallbackKind, CurrentAccessToken};
pub use bridge::{BridgeCallback, LoginBridge, MODULE_NAME};
pub use sdk::{AccessToken, EventParam, EventParams, FacebookSdk, GraphRequestError, GraphResponse};
pub use shared::error::{AppError, AppResult};
