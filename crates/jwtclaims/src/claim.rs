//! Materialized claims
//!
//! A `Claim` is the flat, string-typed form of one claim set member, ready
//! for claims-based identity frameworks that know nothing about JSON.

use crate::error::{Error, Result};
use crate::utils::iso8601;
use crate::value_type::classify;
use chrono::SecondsFormat;
use claimtype::ClaimValueType;
use serde_json::{Number, Value};

/// A single named claim with its canonical string value and type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim {
    name: String,
    value: String,
    value_type: ClaimValueType,
    issuer: String,
    original_issuer: String,
}

impl Claim {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        value_type: ClaimValueType,
        issuer: impl Into<String>,
        original_issuer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            value_type,
            issuer: issuer.into(),
            original_issuer: original_issuer.into(),
        }
    }

    /// Build a claim whose type arrives as text, in either tag form
    ///
    /// # Errors
    ///
    /// `Error::UnknownValueType` when `value_type` names no known tag.
    pub fn from_tagged(
        name: impl Into<String>,
        value: impl Into<String>,
        value_type: &str,
        issuer: impl Into<String>,
        original_issuer: impl Into<String>,
    ) -> Result<Self> {
        let value_type = value_type.parse::<ClaimValueType>()?;
        Ok(Self::new(name, value, value_type, issuer, original_issuer))
    }

    /// Build the claim for one JSON member
    pub(crate) fn from_json(name: &str, value: &Value, issuer: &str, original_issuer: &str) -> Self {
        Self::new(name, render(value), classify(value), issuer, original_issuer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_type(&self) -> ClaimValueType {
        self.value_type
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn original_issuer(&self) -> &str {
        &self.original_issuer
    }

    /// Rebuild the JSON value from the string form and type tag
    pub fn to_json(&self) -> Result<Value> {
        let malformed = || Error::ClaimValueMalformed {
            claim: self.name.clone(),
            value_type: self.value_type,
        };

        match self.value_type {
            ClaimValueType::String | ClaimValueType::DateTime => {
                Ok(Value::String(self.value.clone()))
            }
            ClaimValueType::Integer => self
                .value
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| malformed()),
            ClaimValueType::Double => self
                .value
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(malformed),
            ClaimValueType::Boolean => self
                .value
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|_| malformed()),
            ClaimValueType::JsonArray => match serde_json::from_str(&self.value) {
                Ok(array @ Value::Array(_)) => Ok(array),
                _ => Err(malformed()),
            },
            ClaimValueType::JsonObject => match serde_json::from_str(&self.value) {
                Ok(object @ Value::Object(_)) => Ok(object),
                _ => Err(malformed()),
            },
            ClaimValueType::JsonNull if self.value.is_empty() => Ok(Value::Null),
            ClaimValueType::JsonNull => Err(malformed()),
        }
    }
}

/// Canonical string form of a JSON value
///
/// Date-times render in UTC as RFC 3339 with a `Z` suffix; other strings
/// are kept verbatim. Arrays and objects render as compact JSON.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => match iso8601::parse(text) {
            Ok(time) => time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Err(_) => text.clone(),
        },
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render() {
        assert_eq!(render(&json!(null)), "");
        assert_eq!(render(&json!(true)), "true");
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!(42.0)), "42.0");
        assert_eq!(render(&json!("bob")), "bob");
        assert_eq!(render(&json!("1/1/2000 12:00:00 AM")), "1/1/2000 12:00:00 AM");
        assert_eq!(render(&json!([1, "2", 3])), r#"[1,"2",3]"#);
        assert_eq!(
            render(&json!({"string1": "string1value", "string2": "string2value"})),
            r#"{"string1":"string1value","string2":"string2value"}"#
        );
    }

    #[test]
    fn test_to_json_rebuilds_value() {
        for value in [
            json!(null),
            json!(false),
            json!(-7),
            json!(42.5),
            json!("bob"),
            json!("2000-01-01T00:00:00Z"),
            json!([1, "2", 3]),
            json!({"nested": {"a": [true]}}),
        ] {
            let claim = Claim::from_json("c", &value, "iss", "iss");
            assert_eq!(claim.to_json().unwrap(), value);
        }
    }

    #[test]
    fn test_render_date_time_in_utc() {
        assert_eq!(
            render(&json!("2000-01-01T02:00:00+02:00")),
            "2000-01-01T00:00:00Z"
        );
        assert_eq!(
            render(&json!("2000-01-01T00:00:00.0000000Z")),
            "2000-01-01T00:00:00Z"
        );
        assert_eq!(
            render(&json!("2000-01-01T00:00:00.5")),
            "2000-01-01T00:00:00.500Z"
        );

        let claim = Claim::from_json("t", &json!("1999-12-31T22:00:00-02:00"), "i", "i");
        assert_eq!(claim.value_type(), ClaimValueType::DateTime);
        assert_eq!(claim.to_json().unwrap(), json!("2000-01-01T00:00:00Z"));
    }

    #[test]
    fn test_from_tagged() {
        let claim = Claim::from_tagged(
            "age",
            "42",
            "http://www.w3.org/2001/XMLSchema#integer",
            "i",
            "i",
        )
        .unwrap();
        assert_eq!(claim.value_type(), ClaimValueType::Integer);
        assert_eq!(claim.to_json().unwrap(), json!(42));

        let claim = Claim::from_tagged("roles", "[1]", "JSON_ARRAY", "i", "i").unwrap();
        assert_eq!(claim.value_type(), ClaimValueType::JsonArray);

        assert!(matches!(
            Claim::from_tagged("c", "1", "Decimal", "i", "i"),
            Err(Error::UnknownValueType(tag)) if tag.0 == "Decimal"
        ));
    }

    #[test]
    fn test_to_json_malformed() {
        let claim = Claim::new("c", "forty-two", ClaimValueType::Integer, "i", "i");
        assert!(matches!(
            claim.to_json(),
            Err(Error::ClaimValueMalformed { value_type: ClaimValueType::Integer, .. })
        ));

        let claim = Claim::new("c", "{}", ClaimValueType::JsonArray, "i", "i");
        assert!(claim.to_json().is_err());
    }
}
