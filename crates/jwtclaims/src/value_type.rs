//! Value-type classification
//!
//! Maps a JSON value's shape to its `ClaimValueType`. The tag depends only
//! on the value, never on how a caller later asks for it.

use crate::utils::iso8601;
use claimtype::ClaimValueType;
use serde_json::Value;

/// Classify a JSON value
///
/// Numbers that fit a signed 64-bit integer are `Integer`; every other
/// number is `Double`. Strings are `DateTime` only when they match the
/// ISO-8601 extended grammar.
pub fn classify(value: &Value) -> ClaimValueType {
    match value {
        Value::Null => ClaimValueType::JsonNull,
        Value::Bool(_) => ClaimValueType::Boolean,
        Value::Number(number) if number.is_i64() => ClaimValueType::Integer,
        Value::Number(_) => ClaimValueType::Double,
        Value::String(text) if iso8601::is_date_time(text) => ClaimValueType::DateTime,
        Value::String(_) => ClaimValueType::String,
        Value::Array(_) => ClaimValueType::JsonArray,
        Value::Object(_) => ClaimValueType::JsonObject,
    }
}
