//! ISO-8601 extended date-time grammar
//!
//! Accepts `YYYY-MM-DDTHH:MM:SS[.fraction][Z|±HH:MM]`. A value without an
//! offset is read as UTC.

use crate::error::ConversionCause;
use chrono::{DateTime, NaiveDateTime, Utc};

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an ISO-8601 extended date-time
pub(crate) fn parse(input: &str) -> Result<DateTime<Utc>, ConversionCause> {
    if !has_extended_layout(input) {
        return Err(ConversionCause::NotIso8601(input.to_string()));
    }

    // Layout check guarantees ASCII, so byte slicing is safe
    let tail = &input[19..];
    let has_offset = tail.ends_with(['Z', 'z']) || tail.contains(['+', '-']);

    if has_offset {
        Ok(DateTime::parse_from_rfc3339(input)?.with_timezone(&Utc))
    } else {
        Ok(NaiveDateTime::parse_from_str(input, LOCAL_FORMAT)?.and_utc())
    }
}

/// Whether the string is an ISO-8601 extended date-time
pub(crate) fn is_date_time(input: &str) -> bool {
    parse(input).is_ok()
}

fn has_extended_layout(input: &str) -> bool {
    let bytes = input.as_bytes();
    input.is_ascii()
        && bytes.len() >= 19
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && bytes[16] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn midnight_2000() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_round_trip_format() {
        assert_eq!(parse("2000-01-01T00:00:00.0000000Z").unwrap(), midnight_2000());
        assert_eq!(parse("2000-01-01T00:00:00Z").unwrap(), midnight_2000());
    }

    #[test]
    fn test_offset() {
        assert_eq!(parse("2000-01-01T02:00:00+02:00").unwrap(), midnight_2000());
        assert_eq!(parse("1999-12-31T22:00:00-02:00").unwrap(), midnight_2000());
    }

    #[test]
    fn test_without_offset_is_utc() {
        assert_eq!(parse("2000-01-01T00:00:00").unwrap(), midnight_2000());
        assert_eq!(parse("2000-01-01T00:00:00.5").unwrap().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_rejected() {
        assert!(!is_date_time("1/1/2000 12:00:00 AM"));
        assert!(!is_date_time("2000-01-01"));
        assert!(!is_date_time("2000-01-01 00:00:00Z"));
        assert!(!is_date_time("2000-13-01T00:00:00Z"));
        assert!(!is_date_time("2000-01-01T00:00:00Zjunk"));
        assert!(!is_date_time("bob"));
        assert!(!is_date_time("2000-01-01T00:00:00é"));
    }

    #[test]
    fn test_rejection_causes() {
        assert!(matches!(parse("bob"), Err(ConversionCause::NotIso8601(_))));
        assert!(matches!(
            parse("2000-13-01T00:00:00Z"),
            Err(ConversionCause::DateTime(_))
        ));
    }
}
