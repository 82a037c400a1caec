use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A coerced claim value
///
/// Produced by the coercion engine. Structural JSON passes through
/// untouched in the `Object` and `JsonArray` variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClaimValue {
    #[default]
    Null,
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    DateTime(DateTime<Utc>),
    Array(Vec<ClaimValue>),
    Object(Map<String, Value>),
    JsonArray(Vec<Value>),
}

impl ClaimValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ClaimValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ClaimValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Any integer variant that fits `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            ClaimValue::I16(value) => Some(value.into()),
            ClaimValue::I32(value) => Some(value.into()),
            ClaimValue::I64(value) => Some(value),
            ClaimValue::U16(value) => Some(value.into()),
            ClaimValue::U32(value) => Some(value.into()),
            ClaimValue::U64(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ClaimValue::F32(value) => Some(value.into()),
            ClaimValue::F64(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            ClaimValue::DateTime(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ClaimValue]> {
        match self {
            ClaimValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            ClaimValue::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::I64(value)
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_string())
    }
}
