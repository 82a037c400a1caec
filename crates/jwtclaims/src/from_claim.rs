//! Typed claim access
//!
//! `FromClaim` ties a Rust type to the `Shape` it requests from the
//! coercion engine and unpacks the engine's `ClaimValue` into that type.

use crate::coerce::coerce;
use crate::error::ConversionError;
use crate::shape::{IntWidth, Scalar, Shape};
use crate::value::ClaimValue;
use crate::value_type::classify;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A type that can be read out of a claim value
pub trait FromClaim: Sized {
    /// Shape requested from the coercion engine
    const SHAPE: Shape;

    /// Unpack a coerced value of `Self::SHAPE`
    fn from_claim_value(value: ClaimValue) -> Option<Self>;

    /// Coerce a JSON value and unpack it
    fn from_json(value: &Value) -> Result<Self, ConversionError> {
        let coerced = coerce(value, Self::SHAPE)?;
        Self::from_claim_value(coerced)
            .ok_or_else(|| ConversionError::new(classify(value), Self::SHAPE))
    }
}

macro_rules! scalar_claim {
    ($ty:ty, $scalar:expr, $variant:ident) => {
        impl FromClaim for $ty {
            const SHAPE: Shape = Shape::Scalar($scalar);

            fn from_claim_value(value: ClaimValue) -> Option<Self> {
                match value {
                    ClaimValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl FromClaim for Vec<$ty> {
            const SHAPE: Shape = Shape::Array($scalar);

            fn from_claim_value(value: ClaimValue) -> Option<Self> {
                match value {
                    ClaimValue::Array(items) => items
                        .into_iter()
                        .map(<$ty as FromClaim>::from_claim_value)
                        .collect(),
                    _ => None,
                }
            }
        }
    };
}

scalar_claim!(bool, Scalar::Bool, Bool);
scalar_claim!(i16, Scalar::Integer(IntWidth::I16), I16);
scalar_claim!(i32, Scalar::Integer(IntWidth::I32), I32);
scalar_claim!(i64, Scalar::Integer(IntWidth::I64), I64);
scalar_claim!(u16, Scalar::Integer(IntWidth::U16), U16);
scalar_claim!(u32, Scalar::Integer(IntWidth::U32), U32);
scalar_claim!(u64, Scalar::Integer(IntWidth::U64), U64);
scalar_claim!(f32, Scalar::F32, F32);
scalar_claim!(f64, Scalar::F64, F64);
scalar_claim!(String, Scalar::String, String);
scalar_claim!(DateTime<Utc>, Scalar::DateTime, DateTime);

impl FromClaim for ClaimValue {
    const SHAPE: Shape = Shape::Any;

    fn from_claim_value(value: ClaimValue) -> Option<Self> {
        Some(value)
    }
}

impl FromClaim for Vec<ClaimValue> {
    const SHAPE: Shape = Shape::AnyArray;

    fn from_claim_value(value: ClaimValue) -> Option<Self> {
        match value {
            ClaimValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl FromClaim for Map<String, Value> {
    const SHAPE: Shape = Shape::JsonObject;

    fn from_claim_value(value: ClaimValue) -> Option<Self> {
        match value {
            ClaimValue::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl FromClaim for Vec<Value> {
    const SHAPE: Shape = Shape::JsonArray;

    fn from_claim_value(value: ClaimValue) -> Option<Self> {
        match value {
            ClaimValue::JsonArray(items) => Some(items),
            _ => None,
        }
    }
}

/// JSON null reads as `None`; anything else is read as `T`.
impl<T: FromClaim> FromClaim for Option<T> {
    const SHAPE: Shape = T::SHAPE;

    fn from_claim_value(value: ClaimValue) -> Option<Self> {
        match value {
            ClaimValue::Null => Some(None),
            other => T::from_claim_value(other).map(Some),
        }
    }

    fn from_json(value: &Value) -> Result<Self, ConversionError> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_json(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(i32::from_json(&json!(42)), Ok(42));
        assert_eq!(f32::from_json(&json!(42.0)), Ok(42.0));
        assert_eq!(String::from_json(&json!("bob")), Ok("bob".to_string()));
        assert!(bool::from_json(&json!("true")).is_err());
    }

    #[test]
    fn test_arrays() {
        assert_eq!(Vec::<i32>::from_json(&json!([1, 2, 3])), Ok(vec![1, 2, 3]));
        assert!(Vec::<i32>::from_json(&json!(1)).is_err());
        assert_eq!(
            Vec::<ClaimValue>::from_json(&json!([1, "2", 3])),
            Ok(vec![ClaimValue::I64(1), ClaimValue::from("2"), ClaimValue::I64(3)])
        );
        assert_eq!(
            Vec::<Value>::from_json(&json!([1, [2]])),
            Ok(vec![json!(1), json!([2])])
        );
    }

    #[test]
    fn test_option() {
        assert_eq!(Option::<i32>::from_json(&json!(null)), Ok(None));
        assert_eq!(Option::<i32>::from_json(&json!(5)), Ok(Some(5)));
        assert!(Option::<i32>::from_json(&json!("5")).is_err());
        assert_eq!(Option::<Vec<String>>::from_json(&json!(null)), Ok(None));
    }

    #[test]
    fn test_shapes() {
        assert_eq!(<DateTime<Utc>>::SHAPE, Shape::Scalar(Scalar::DateTime));
        assert_eq!(<Vec<u16>>::SHAPE, Shape::Array(Scalar::Integer(IntWidth::U16)));
        assert_eq!(<Option<Map<String, Value>>>::SHAPE, Shape::JsonObject);
    }
}
