//! Type coercion engine
//!
//! Converts a JSON value into a requested `Shape`. Every decision lives in
//! one `match` over the shape, so the conversion matrix stays exhaustive:
//!
//! - integers widen to any integer or float target that can hold them
//! - floats convert only to float targets
//! - booleans convert only to `bool`
//! - strings convert to `string`, and to `date-time` when ISO-8601
//! - null satisfies `string` and every non-scalar shape with an empty value
//! - arrays convert element by element, all or nothing
//! - scalars are never wrapped into arrays

use crate::error::{ConversionCause, ConversionError};
use crate::shape::{IntWidth, Scalar, Shape};
use crate::utils::iso8601;
use crate::value::ClaimValue;
use crate::value_type::classify;
use serde_json::{Map, Number, Value};
use std::num::TryFromIntError;

/// Coerce a JSON value into the requested shape
pub fn coerce(value: &Value, shape: Shape) -> Result<ClaimValue, ConversionError> {
    match (shape, value) {
        (Shape::Scalar(scalar), _) => coerce_scalar(value, scalar),

        (Shape::Array(scalar), Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                coerce_scalar(item, scalar).map_err(|error| {
                    mismatch(value, shape).with_cause(ConversionCause::Element {
                        index,
                        error: Box::new(error),
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ClaimValue::Array),

        (Shape::Any, _) => Ok(natural(value)),

        (Shape::AnyArray, Value::Array(items)) => {
            Ok(ClaimValue::Array(items.iter().map(natural).collect()))
        }

        (Shape::JsonObject, Value::Object(map)) => Ok(ClaimValue::Object(map.clone())),

        (Shape::JsonArray, Value::Array(items)) => Ok(ClaimValue::JsonArray(items.clone())),

        (Shape::Array(_) | Shape::AnyArray, Value::Null) => Ok(ClaimValue::Array(Vec::new())),
        (Shape::JsonObject, Value::Null) => Ok(ClaimValue::Object(Map::new())),
        (Shape::JsonArray, Value::Null) => Ok(ClaimValue::JsonArray(Vec::new())),

        (Shape::Array(_) | Shape::AnyArray | Shape::JsonObject | Shape::JsonArray, _) => {
            Err(mismatch(value, shape))
        }
    }
}

fn coerce_scalar(value: &Value, scalar: Scalar) -> Result<ClaimValue, ConversionError> {
    let shape = Shape::Scalar(scalar);

    match (scalar, value) {
        (Scalar::Bool, Value::Bool(flag)) => Ok(ClaimValue::Bool(*flag)),

        (Scalar::String, Value::String(text)) => Ok(ClaimValue::String(text.clone())),
        (Scalar::String, Value::Null) => Ok(ClaimValue::String(String::new())),

        (Scalar::DateTime, Value::String(text)) => iso8601::parse(text)
            .map(ClaimValue::DateTime)
            .map_err(|cause| mismatch(value, shape).with_cause(cause)),

        (Scalar::Integer(width), Value::Number(number)) => {
            // Only integer-shaped numbers may become integers
            let wide = number.as_i64().ok_or_else(|| mismatch(value, shape))?;
            narrow(wide, width).map_err(|cause| mismatch(value, shape).with_cause(cause.into()))
        }

        (Scalar::F64, Value::Number(number)) => number
            .as_f64()
            .map(ClaimValue::F64)
            .ok_or_else(|| mismatch(value, shape)),

        (Scalar::F32, Value::Number(number)) => to_f32(number)
            .map(ClaimValue::F32)
            .map_err(|cause| mismatch(value, shape).with_cause(cause)),

        _ => Err(mismatch(value, shape)),
    }
}

fn narrow(wide: i64, width: IntWidth) -> Result<ClaimValue, TryFromIntError> {
    Ok(match width {
        IntWidth::I16 => ClaimValue::I16(i16::try_from(wide)?),
        IntWidth::I32 => ClaimValue::I32(i32::try_from(wide)?),
        IntWidth::I64 => ClaimValue::I64(wide),
        IntWidth::U16 => ClaimValue::U16(u16::try_from(wide)?),
        IntWidth::U32 => ClaimValue::U32(u32::try_from(wide)?),
        IntWidth::U64 => ClaimValue::U64(u64::try_from(wide)?),
    })
}

/// Narrow to f32, rounding to the nearest representable value.
///
/// Precision loss is accepted; a finite value too large for f32 is not.
fn to_f32(number: &Number) -> Result<f32, ConversionCause> {
    let value = number.as_f64().unwrap_or(f64::NAN);
    let narrowed = value as f32;
    if narrowed.is_infinite() && value.is_finite() {
        return Err(ConversionCause::FloatOverflow { value });
    }
    Ok(narrowed)
}

/// Box a value in its natural widened type
fn natural(value: &Value) -> ClaimValue {
    match value {
        Value::Null => ClaimValue::Null,
        Value::Bool(flag) => ClaimValue::Bool(*flag),
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(integer), _) => ClaimValue::I64(integer),
            (None, Some(float)) => ClaimValue::F64(float),
            (None, None) => ClaimValue::Null,
        },
        Value::String(text) => ClaimValue::String(text.clone()),
        Value::Array(items) => ClaimValue::Array(items.iter().map(natural).collect()),
        Value::Object(map) => ClaimValue::Object(map.clone()),
    }
}

fn mismatch(value: &Value, shape: Shape) -> ConversionError {
    ConversionError::new(classify(value), shape)
}
