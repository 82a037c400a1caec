//! Claim Types
//!
//! This crate provides the `ClaimValueType` tag attached to every claim,
//! the registered claim and header names, and the `StandardClaims` trait.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default issuer label used when a claim set has no issuer of its own.
pub const DEFAULT_ISSUER: &str = "LOCAL AUTHORITY";

/// Registered claim names (RFC 7519, section 4.1)
pub mod registered {
    pub const ISSUER: &str = "iss";
    pub const SUBJECT: &str = "sub";
    pub const AUDIENCE: &str = "aud";
    pub const EXPIRATION: &str = "exp";
    pub const NOT_BEFORE: &str = "nbf";
    pub const ISSUED_AT: &str = "iat";
    pub const JWT_ID: &str = "jti";
}

/// Registered header parameter names (RFC 7515, section 4.1)
pub mod header {
    pub const ALGORITHM: &str = "alg";
    pub const KEY_ID: &str = "kid";
    pub const TYPE: &str = "typ";
    pub const CONTENT_TYPE: &str = "cty";
}

const XML_SCHEMA: &str = "http://www.w3.org/2001/XMLSchema#";

/// Canonical label describing the JSON shape a claim value came from.
///
/// The first five variants mirror the primitive value types of generic
/// claims frameworks. The `Json*` variants cover values with no primitive
/// equivalent, so a consumer can re-parse the string form later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimValueType {
    String,
    Integer,
    Double,
    Boolean,
    DateTime,
    JsonArray,
    JsonObject,
    JsonNull,
}

impl ClaimValueType {
    /// All tags, in declaration order.
    pub const ALL: [ClaimValueType; 8] = [
        ClaimValueType::String,
        ClaimValueType::Integer,
        ClaimValueType::Double,
        ClaimValueType::Boolean,
        ClaimValueType::DateTime,
        ClaimValueType::JsonArray,
        ClaimValueType::JsonObject,
        ClaimValueType::JsonNull,
    ];

    /// Short canonical tag (`"Integer"`, `"JsonArray"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimValueType::String => "String",
            ClaimValueType::Integer => "Integer",
            ClaimValueType::Double => "Double",
            ClaimValueType::Boolean => "Boolean",
            ClaimValueType::DateTime => "DateTime",
            ClaimValueType::JsonArray => "JsonArray",
            ClaimValueType::JsonObject => "JsonObject",
            ClaimValueType::JsonNull => "JsonNull",
        }
    }

    /// Identifier understood by claims frameworks that key value types by URI
    pub fn as_uri(&self) -> &'static str {
        match self {
            ClaimValueType::String => "http://www.w3.org/2001/XMLSchema#string",
            ClaimValueType::Integer => "http://www.w3.org/2001/XMLSchema#integer",
            ClaimValueType::Double => "http://www.w3.org/2001/XMLSchema#double",
            ClaimValueType::Boolean => "http://www.w3.org/2001/XMLSchema#boolean",
            ClaimValueType::DateTime => "http://www.w3.org/2001/XMLSchema#dateTime",
            ClaimValueType::JsonArray => "JSON_ARRAY",
            ClaimValueType::JsonObject => "JSON",
            ClaimValueType::JsonNull => "JSON_NULL",
        }
    }

    /// Whether the tag names a structural JSON value rather than a primitive
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ClaimValueType::JsonArray | ClaimValueType::JsonObject | ClaimValueType::JsonNull
        )
    }
}

impl fmt::Display for ClaimValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known value type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown claim value type '{0}'")]
pub struct UnknownValueType(pub String);

impl FromStr for ClaimValueType {
    type Err = UnknownValueType;

    /// Accepts both the short tag and the URI form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(suffix) = s.strip_prefix(XML_SCHEMA) {
            return match suffix {
                "string" => Ok(ClaimValueType::String),
                "integer" => Ok(ClaimValueType::Integer),
                "double" => Ok(ClaimValueType::Double),
                "boolean" => Ok(ClaimValueType::Boolean),
                "dateTime" => Ok(ClaimValueType::DateTime),
                _ => Err(UnknownValueType(s.to_string())),
            };
        }

        match s {
            "JSON_ARRAY" => return Ok(ClaimValueType::JsonArray),
            "JSON" => return Ok(ClaimValueType::JsonObject),
            "JSON_NULL" => return Ok(ClaimValueType::JsonNull),
            _ => {}
        }

        ClaimValueType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownValueType(s.to_string()))
    }
}

/// The `StandardClaims` trait defines the registered JWT claims.
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - the single audience, when `aud` is a string
    fn audience(&self) -> Option<&str>;
    /// Expiration Time (exp) - seconds since Unix epoch
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - seconds since Unix epoch
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - seconds since Unix epoch
    fn issued_at(&self) -> Option<i64>;
    /// JWT ID (jti) - provides a unique identifier for the JWT
    fn jwt_id(&self) -> Option<&str>;
}
