//! Timestamp parsing.
//!
//! Accepts RFC 3339 date-times with a `Z` or numeric offset, minute-precision
//! date-times with a zone, ISO date-times without an offset (taken as UTC)
//! and bare dates (UTC midnight). Instants are truncated to millisecond
//! resolution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use serde_json::Value;

use crate::error::TimestampError;

/// Zoned layouts RFC 3339 does not cover. `%#z` also accepts `Z`.
const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Offset-less date-time layouts, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp string into a UTC instant.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();

    let instant = parse_with_offset(raw)
        .or_else(|| parse_naive(raw))
        .or_else(|| parse_date(raw))
        .ok_or_else(|| TimestampError::Unrecognised(raw.to_string()))?;

    Ok(instant.trunc_subsecs(3))
}

/// Parse a JSON value; anything other than a string is rejected.
pub fn parse_timestamp_value(value: &Value) -> Result<DateTime<Utc>, TimestampError> {
    match value {
        Value::String(raw) => parse_timestamp(raw),
        _ => Err(TimestampError::NotAString),
    }
}

fn parse_with_offset(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            ZONED_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        })
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive(raw: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
