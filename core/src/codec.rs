//! JSON encoding and decoding for request and response bodies.
//!
//! # Design
//! Writes and reads are deliberately asymmetric with respect to dates:
//! - `encode` emits whatever the payload's `Serialize` impl produces, so
//!   `chrono` values go out as ISO-8601 with their own offset (`Z` for UTC).
//! - `decode` rewrites every RFC 3339 timestamp string in the body to the
//!   local time zone before handing the document to `T`'s `Deserialize`.
//!   The instant is unchanged, only its offset differs.
//!
//! The rewrite applies to any string that parses as a timestamp, including
//! ones that land in `String` fields.
//!
//! `serde_json` is built with `arbitrary_precision`, so going through a
//! `Value` keeps integers beyond 64 bits exact.

use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::RestError;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Serialize a request payload to JSON text.
pub fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<String, RestError> {
    serde_json::to_string(payload).map_err(|e| RestError::Serialization(e.to_string()))
}

/// Deserialize a response body, reading timestamps in the local time zone.
///
/// An empty or whitespace-only body decodes as JSON `null`, so `Option<_>`
/// and `()` targets accept a bodiless 2xx.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RestError> {
    let mut document: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| RestError::Deserialization(e.to_string()))?
    };
    localize_timestamps(&mut document);
    serde_json::from_value(document).map_err(|e| RestError::Deserialization(e.to_string()))
}

fn localize_timestamps(value: &mut Value) {
    match value {
        Value::String(s) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                *s = parsed.with_timezone(&Local).to_rfc3339();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(localize_timestamps),
        Value::Object(fields) => fields.values_mut().for_each(localize_timestamps),
        _ => {}
    }
}
