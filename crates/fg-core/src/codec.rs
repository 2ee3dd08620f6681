//! Helpers for turning stored primitives back into typed fields.
//!
//! Stores call these while decoding rows so a damaged record surfaces as
//! [`CoreError::Decode`] naming the offending field.

use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub fn parse_uuid(s: &str, field: &str) -> CoreResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| CoreError::Decode {
        field: field.into(),
        message: format!("invalid UUID {s:?}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn parse_timestamp_millis(ms: i64, field: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| CoreError::Decode {
        field: field.into(),
        message: format!("timestamp out of range: {ms}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Trimmed, non-blank value or `None`
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
