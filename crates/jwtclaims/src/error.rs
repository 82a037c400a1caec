//! Errors for jwtclaims

use crate::shape::Shape;
use claimtype::{ClaimValueType, UnknownValueType};
use std::num::TryFromIntError;
use thiserror::Error;

/// jwtclaims Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Token section must be a JSON object, found {0}")]
    NotAnObject(ClaimValueType),

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Claim '{0}' was not found")]
    ClaimNotFound(String),

    #[error("Claim '{claim}' could not be read: {source}")]
    ConversionFailed {
        claim: String,
        #[source]
        source: ConversionError,
    },

    #[error("Claim '{claim}' has a value that is not a valid {value_type}")]
    ClaimValueMalformed {
        claim: String,
        value_type: ClaimValueType,
    },

    #[error(transparent)]
    UnknownValueType(#[from] UnknownValueType),

    #[error("Timestamp out of bounds: {value} (valid range: {min} to {max})")]
    TimestampOutOfBounds { value: i64, min: i64, max: i64 },

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("Remote error: {0}")]
    RemoteError(String),

    #[error("Remote URL too long: {length} characters (maximum: {max} characters)")]
    RemoteUrlTooLong { length: usize, max: usize },

    #[error("Remote response too large: {size} bytes (maximum: {max} bytes)")]
    RemoteResponseTooLarge { size: usize, max: usize },

    #[error("Document address is required")]
    AddressMissing,

    #[error("Unable to read document from '{address}': {reason}")]
    DocumentUnavailable { address: String, reason: String },

    #[error("Document retrieval was cancelled")]
    Cancelled,

    #[error("Invalid configuration document: {0}")]
    ConfigurationInvalid(String),
}

/// Failure to convert a present claim value into the requested shape
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot convert {from} value to {to}")]
pub struct ConversionError {
    from: ClaimValueType,
    to: Shape,
    #[source]
    cause: Option<ConversionCause>,
}

impl ConversionError {
    pub(crate) fn new(from: ClaimValueType, to: Shape) -> Self {
        Self {
            from,
            to,
            cause: None,
        }
    }

    pub(crate) fn with_cause(mut self, cause: ConversionCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Tag of the JSON value that was found
    pub fn found(&self) -> ClaimValueType {
        self.from
    }

    /// Shape the caller asked for
    pub fn requested(&self) -> Shape {
        self.to
    }

    /// Nested failure, when a numeric or date-time parse was attempted
    pub fn cause(&self) -> Option<&ConversionCause> {
        self.cause.as_ref()
    }
}

/// Underlying reason for a `ConversionError`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionCause {
    #[error("integer out of range: {0}")]
    IntegerRange(#[from] TryFromIntError),

    #[error("{value} overflows a 32-bit float")]
    FloatOverflow { value: f64 },

    #[error("'{0}' is not an ISO-8601 extended date-time")]
    NotIso8601(String),

    #[error("invalid date-time: {0}")]
    DateTime(#[from] chrono::ParseError),

    #[error("element {index}: {error}")]
    Element {
        index: usize,
        #[source]
        error: Box<ConversionError>,
    },
}

/// Result type alias for jwtclaims operations
pub type Result<T> = std::result::Result<T, Error>;
