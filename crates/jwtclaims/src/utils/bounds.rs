//! Bounds validation utilities

use crate::error::{Error, Result};
use crate::limits::{MAX_TIMESTAMP, MIN_TIMESTAMP};
use chrono::{DateTime, Utc};

/// Check if timestamp is within acceptable bounds
pub(crate) fn validate_timestamp_bounds(value: i64) -> Result<()> {
    if !(MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(&value) {
        return Err(Error::TimestampOutOfBounds {
            value,
            min: MIN_TIMESTAMP,
            max: MAX_TIMESTAMP,
        });
    }
    Ok(())
}

/// Convert a NumericDate (seconds since epoch) into a UTC date-time
pub(crate) fn timestamp_to_datetime(value: i64) -> Result<DateTime<Utc>> {
    validate_timestamp_bounds(value)?;
    DateTime::from_timestamp(value, 0).ok_or(Error::TimestampOutOfBounds {
        value,
        min: MIN_TIMESTAMP,
        max: MAX_TIMESTAMP,
    })
}
