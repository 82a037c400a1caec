//! Requested shapes for claim coercion
//!
//! A `Shape` names what the caller wants a claim turned into. The set is
//! closed so the coercion matrix in `coerce` stays exhaustive.

use std::fmt;

/// Integer target widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I16,
    I32,
    I64,
    U16,
    U32,
    U64,
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::U16 => "u16",
            IntWidth::U32 => "u32",
            IntWidth::U64 => "u64",
        };
        f.write_str(name)
    }
}

/// Scalar target kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Bool,
    Integer(IntWidth),
    F32,
    F64,
    String,
    DateTime,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool => f.write_str("bool"),
            Scalar::Integer(width) => width.fmt(f),
            Scalar::F32 => f.write_str("f32"),
            Scalar::F64 => f.write_str("f64"),
            Scalar::String => f.write_str("string"),
            Scalar::DateTime => f.write_str("date-time"),
        }
    }
}

/// Shape requested from the coercion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single scalar
    Scalar(Scalar),
    /// A homogeneous array, every element converted as the scalar
    Array(Scalar),
    /// Any JSON value, boxed in its natural widened type
    Any,
    /// An array of any values, each boxed in its natural widened type
    AnyArray,
    /// The JSON object itself, without conversion
    JsonObject,
    /// The JSON array itself, without conversion
    JsonArray,
}

impl Shape {
    /// Whether the shape can only be satisfied by a JSON array
    pub fn is_array(&self) -> bool {
        matches!(self, Shape::Array(_) | Shape::AnyArray | Shape::JsonArray)
    }

    /// Whether JSON null satisfies the shape
    ///
    /// `string` reads null as empty text. Other scalars are not nullable;
    /// request `Option<T>` for those.
    pub fn accepts_null(&self) -> bool {
        !matches!(self, Shape::Scalar(scalar) if *scalar != Scalar::String)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(scalar) => scalar.fmt(f),
            Shape::Array(scalar) => write!(f, "array of {scalar}"),
            Shape::Any => f.write_str("any value"),
            Shape::AnyArray => f.write_str("array of any value"),
            Shape::JsonObject => f.write_str("JSON object"),
            Shape::JsonArray => f.write_str("JSON array"),
        }
    }
}
