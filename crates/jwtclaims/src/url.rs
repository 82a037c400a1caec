//! Address validation for remote document retrieval
//!
//! Rejects empty, oversized, or non-HTTP addresses before any request is
//! made.

use crate::error::{Error, Result};
use crate::limits::MAX_ADDRESS_LENGTH;

/// Validate a document address and parse it
pub(crate) fn validate_address(address: &str, require_https: bool) -> Result<url::Url> {
    if address.trim().is_empty() {
        return Err(Error::AddressMissing);
    }

    if address.len() > MAX_ADDRESS_LENGTH {
        return Err(Error::RemoteUrlTooLong {
            length: address.len(),
            max: MAX_ADDRESS_LENGTH,
        });
    }

    let parsed = address
        .parse::<url::Url>()
        .map_err(|e| Error::RemoteError(format!("invalid address: {e}")))?;

    match parsed.scheme() {
        "https" => {}
        "http" if !require_https => {}
        "http" => {
            return Err(Error::RemoteError(
                "address must use https scheme".into(),
            ));
        }
        _ => {
            return Err(Error::RemoteError(
                "address must use http or https scheme".into(),
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(Error::RemoteError("address must have a valid host".into()));
    }

    Ok(parsed)
}
