//! Canonical timestamp rendering.
//!
//! Every instant leaving heartwatch is rendered in UTC with exactly three
//! fractional digits, e.g. `2025-08-04T10:03:00.000Z`.

use chrono::{DateTime, Utc};

/// strftime pattern for the canonical millisecond UTC form.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Render an instant as `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter for instants in the canonical millisecond form.
#[cfg(feature = "serde")]
pub(crate) mod millis_utc {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&instant.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
