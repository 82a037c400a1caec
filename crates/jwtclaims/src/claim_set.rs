//! Claim set
//!
//! A `ClaimSet` wraps one JSON object (a token header or payload) and
//! exposes its members as typed values on demand. It never mutates the
//! wrapped object, so a set can be shared freely across threads.

use crate::claim::Claim;
use crate::error::{Error, Result};
use crate::from_claim::FromClaim;
use crate::utils::bounds::timestamp_to_datetime;
use crate::value_type::classify;
use chrono::{DateTime, Utc};
use claimtype::{ClaimValueType, DEFAULT_ISSUER, StandardClaims, registered};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Read-only, typed view over one JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    root: Map<String, Value>,
}

impl ClaimSet {
    /// Wrap an already-parsed JSON object
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self::new(root)),
            other => Err(Error::NotAnObject(classify(&other))),
        }
    }

    /// Parse JSON text into a claim set
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::FormatInvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Read a required claim as `T`
    ///
    /// # Errors
    ///
    /// - `Error::ClaimNotFound` when no member has this exact name
    /// - `Error::ConversionFailed` when the value cannot become a `T`
    pub fn get_value<T: FromClaim>(&self, name: &str) -> Result<T> {
        let value = self
            .root
            .get(name)
            .ok_or_else(|| Error::ClaimNotFound(name.to_string()))?;

        T::from_json(value).map_err(|source| Error::ConversionFailed {
            claim: name.to_string(),
            source,
        })
    }

    /// Read an optional claim as `T`
    ///
    /// Returns `None` exactly when `get_value` would fail. The failure is
    /// logged at debug level and never returned.
    pub fn find_value<T: FromClaim>(&self, name: &str) -> Option<T> {
        match self.get_value(name) {
            Ok(value) => Some(value),
            Err(error) => {
                debug!(claim = name, %error, "claim not readable as requested type");
                None
            }
        }
    }

    /// Read a claim, reporting whether it was found and converted
    ///
    /// On failure the value is `T::default()`. A claim that is present and
    /// null reads as `(true, empty)` for nullable shapes, which is distinct
    /// from an absent claim's `(false, default)`.
    pub fn try_get_value<T: FromClaim + Default>(&self, name: &str) -> (bool, T) {
        match self.find_value(name) {
            Some(value) => (true, value),
            None => (false, T::default()),
        }
    }

    /// Whether a member with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.root.contains_key(name)
    }

    /// The wrapped JSON object
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_root(self) -> Map<String, Value> {
        self.root
    }

    /// Member names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Type tag of one member
    pub fn value_type(&self, name: &str) -> Option<ClaimValueType> {
        self.root.get(name).map(classify)
    }

    /// Flatten every member into a `Claim`, in insertion order
    pub fn materialize(&self, issuer: &str, original_issuer: &str) -> Vec<Claim> {
        let claims: Vec<Claim> = self
            .root
            .iter()
            .map(|(name, value)| Claim::from_json(name, value, issuer, original_issuer))
            .collect();
        trace!(count = claims.len(), issuer, "materialized claims");
        claims
    }

    /// Flatten every member using the default issuer
    pub fn claims(&self) -> Vec<Claim> {
        self.materialize(DEFAULT_ISSUER, DEFAULT_ISSUER)
    }

    // ============================================================================
    // Registered claims
    // ============================================================================

    /// All audiences, whether `aud` is a string or an array of strings
    ///
    /// Non-string array entries are skipped.
    pub fn audiences(&self) -> Vec<String> {
        match self.root.get(registered::AUDIENCE) {
            Some(Value::String(audience)) => vec![audience.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `nbf` as a date-time
    pub fn valid_from(&self) -> Result<Option<DateTime<Utc>>> {
        self.not_before().map(timestamp_to_datetime).transpose()
    }

    /// `exp` as a date-time
    pub fn valid_to(&self) -> Result<Option<DateTime<Utc>>> {
        self.expiration().map(timestamp_to_datetime).transpose()
    }

    /// `iat` as a date-time
    pub fn issued_at_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.issued_at().map(timestamp_to_datetime).transpose()
    }

    fn str_member(&self, name: &str) -> Option<&str> {
        self.root.get(name).and_then(Value::as_str)
    }

    fn i64_member(&self, name: &str) -> Option<i64> {
        self.root.get(name).and_then(Value::as_i64)
    }
}

impl StandardClaims for ClaimSet {
    fn issuer(&self) -> Option<&str> {
        self.str_member(registered::ISSUER)
    }

    fn subject(&self) -> Option<&str> {
        self.str_member(registered::SUBJECT)
    }

    fn audience(&self) -> Option<&str> {
        self.str_member(registered::AUDIENCE)
    }

    fn expiration(&self) -> Option<i64> {
        self.i64_member(registered::EXPIRATION)
    }

    fn not_before(&self) -> Option<i64> {
        self.i64_member(registered::NOT_BEFORE)
    }

    fn issued_at(&self) -> Option<i64> {
        self.i64_member(registered::ISSUED_AT)
    }

    fn jwt_id(&self) -> Option<&str> {
        self.str_member(registered::JWT_ID)
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(root: Map<String, Value>) -> Self {
        Self::new(root)
    }
}

impl TryFrom<Value> for ClaimSet {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}
