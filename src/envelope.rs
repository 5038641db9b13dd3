//! Response envelope module
//!
//! Defines the `{headers, statusCode, body}` record expected by HTTP gateway
//! integrations, and the header merge used to fill it.

use serde::Serialize;
use serde_json::{Map, Value};

/// Header mapping: header name to an opaque value (string, bool, number...)
pub type Headers = Map<String, Value>;

/// Status code used when the caller does not supply one
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Gateway response envelope
///
/// `B` is the body type: JSON text for `ResHandler::json`, whatever the
/// caller passed for `ResHandler::html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<B = String> {
    pub headers: Headers,
    pub status_code: u16,
    /// Absent body is left out of the serialized envelope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<B>,
}

/// Overlay `overrides` on top of `defaults`
///
/// Keys only present on one side are kept; on collision the value from
/// `overrides` wins. Values are copied as-is, nested values are not merged.
/// An overwritten key keeps its original position.
pub fn merge_headers(defaults: &Headers, overrides: Option<&Headers>) -> Headers {
    let mut merged = defaults.clone();
    if let Some(overrides) = overrides {
        for (name, value) in overrides {
            merged.insert(name.clone(), value.clone());
        }
    }
    merged
}

/// Build a header mapping from a `json!` object literal
#[cfg(test)]
pub(crate) fn headers(value: Value) -> Headers {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}
