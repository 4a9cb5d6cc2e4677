//! Usage: Analytics event parameter translation (host JSON object -> flat SDK params).
//!
//! Numbers become doubles, strings stay strings, nulls stay null, nested maps
//! are translated recursively. Lists are a hard failure by contract: dropping
//! them silently would mask caller mistakes.

use crate::sdk::{EventParam, EventParams};
use crate::shared::error::AppResult;
use serde_json::Value;

/// Translates the host's parameter object. `null` and the empty object
/// forward as `None`, mirroring the original bridge's null-bundle behavior.
pub(crate) fn from_json(parameters: &Value) -> AppResult<Option<EventParams>> {
    match parameters {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(map) => Ok(Some(convert_map(map)?)),
        _ => Err("EVENT_PARAMS_INVALID: event parameters must be an object".into()),
    }
}

fn convert_map(map: &serde_json::Map<String, Value>) -> AppResult<EventParams> {
    let mut out = EventParams::new();
    for (key, value) in map {
        out.insert(key.clone(), convert_value(key, value)?);
    }
    Ok(out)
}

fn convert_value(key: &str, value: &Value) -> AppResult<EventParam> {
    match value {
        Value::Null => Ok(EventParam::Null),
        Value::Bool(flag) => Ok(EventParam::Bool(*flag)),
        Value::Number(number) => number.as_f64().map(EventParam::Number).ok_or_else(|| {
            format!("EVENT_PARAMS_INVALID: parameter `{key}` is not representable as a double")
                .into()
        }),
        Value::String(text) => Ok(EventParam::Text(text.clone())),
        Value::Object(nested) => Ok(EventParam::Nested(convert_map(nested)?)),
        Value::Array(_) => Err(format!(
            "EVENT_PARAMS_UNSUPPORTED: lists are not supported in event parameters (`{key}`)"
        )
        .into()),
    }
}
