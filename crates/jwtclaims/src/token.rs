//! JSON Web Token sections
//!
//! `JsonWebToken` holds the header and payload of a token as two claim
//! sets. Decoding a compact token does not verify its signature.

use crate::claim::Claim;
use crate::claim_set::ClaimSet;
use crate::error::{Error, Result};
use crate::from_claim::FromClaim;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::utils::base64url;
use claimtype::{DEFAULT_ISSUER, StandardClaims, header};

/// The Base64URL segments of a compact token
#[derive(Debug, Clone, PartialEq, Eq)]
struct EncodedParts {
    header: String,
    payload: String,
    signature: String,
}

/// A token split into header and payload claim sets
#[derive(Debug, Clone, PartialEq)]
pub struct JsonWebToken {
    header: ClaimSet,
    payload: ClaimSet,
    encoded: Option<EncodedParts>,
}

impl JsonWebToken {
    /// Build a token from header and payload JSON text
    pub fn from_sections(header_json: &str, payload_json: &str) -> Result<Self> {
        Ok(Self {
            header: ClaimSet::from_json(header_json)?,
            payload: ClaimSet::from_json(payload_json)?,
            encoded: None,
        })
    }

    /// Decode a compact `header.payload.signature` token
    ///
    /// The signature segment is kept but not checked.
    pub fn from_compact(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        let payload_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        let signature_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        if parts.next().is_some() {
            return Err(Error::FormatInvalid);
        }

        let header_json = base64url::decode_string(header_b64, MAX_DECODED_HEADER_SIZE)?;
        let header = ClaimSet::from_json(&header_json)
            .map_err(|e| section_error("header", e))?;

        let payload_json = base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
        let payload = ClaimSet::from_json(&payload_json)
            .map_err(|e| section_error("payload", e))?;

        Ok(Self {
            header,
            payload,
            encoded: Some(EncodedParts {
                header: header_b64.to_string(),
                payload: payload_b64.to_string(),
                signature: signature_b64.to_string(),
            }),
        })
    }

    pub fn header(&self) -> &ClaimSet {
        &self.header
    }

    pub fn payload(&self) -> &ClaimSet {
        &self.payload
    }

    // ============================================================================
    // Section accessors
    // ============================================================================

    pub fn get_header_value<T: FromClaim>(&self, name: &str) -> Result<T> {
        self.header.get_value(name)
    }

    pub fn try_get_header_value<T: FromClaim + Default>(&self, name: &str) -> (bool, T) {
        self.header.try_get_value(name)
    }

    pub fn get_payload_value<T: FromClaim>(&self, name: &str) -> Result<T> {
        self.payload.get_value(name)
    }

    pub fn try_get_payload_value<T: FromClaim + Default>(&self, name: &str) -> (bool, T) {
        self.payload.try_get_value(name)
    }

    /// Payload claims, labelled with the `iss` claim when it is a string
    pub fn claims(&self) -> Vec<Claim> {
        let issuer = self.payload.issuer().unwrap_or(DEFAULT_ISSUER);
        self.payload.materialize(issuer, issuer)
    }

    // ============================================================================
    // Header parameters
    // ============================================================================

    /// `alg` header parameter
    pub fn algorithm(&self) -> Option<&str> {
        self.header_str(header::ALGORITHM)
    }

    /// `kid` header parameter
    pub fn key_id(&self) -> Option<&str> {
        self.header_str(header::KEY_ID)
    }

    /// `typ` header parameter
    pub fn token_type(&self) -> Option<&str> {
        self.header_str(header::TYPE)
    }

    /// `cty` header parameter
    pub fn content_type(&self) -> Option<&str> {
        self.header_str(header::CONTENT_TYPE)
    }

    /// Encoded signature segment, for tokens decoded from compact form
    pub fn encoded_signature(&self) -> Option<&str> {
        self.encoded.as_ref().map(|parts| parts.signature.as_str())
    }

    /// `header.payload` as it appeared in the compact token
    pub fn signing_input(&self) -> Option<String> {
        self.encoded
            .as_ref()
            .map(|parts| format!("{}.{}", parts.header, parts.payload))
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.header.root().get(name).and_then(|value| value.as_str())
    }
}

/// Prefix JSON errors with the section they came from
fn section_error(section: &str, error: Error) -> Error {
    match error {
        Error::FormatInvalidJson(msg) => {
            Error::FormatInvalidJson(format!("Failed to parse {section}: {msg}"))
        }
        other => other,
    }
}
