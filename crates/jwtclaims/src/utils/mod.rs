//! Internal helpers for token decoding, timestamps, and date-time grammar

pub mod base64url;
pub(crate) mod bounds;
pub(crate) mod iso8601;
