//! Error types for loading and detection.

use thiserror::Error;

/// A timestamp field could not be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The field was present but not a JSON string.
    #[error("timestamp must be a string")]
    NotAString,

    /// The string is not a recognised date-time.
    #[error("unrecognised timestamp: {0:?}")]
    Unrecognised(String),
}

/// Why a single record was dropped.
///
/// These never reach the caller of a load; they are counted and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The entry is not a JSON object.
    #[error("record is not an object")]
    NotAnObject,

    /// `service` is missing, not a string, or blank.
    #[error("record has a missing or blank service")]
    InvalidService,

    /// `timestamp` is missing.
    #[error("record has no timestamp")]
    MissingTimestamp,

    /// `timestamp` is present but unusable.
    #[error("record has an invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimestampError),
}

/// Errors that abort a load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read at all.
    #[error("failed to read {origin}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a JSON array of records.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Errors in detection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A detection parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The layered settings could not be built.
    #[error("failed to load settings")]
    Layer(#[from] config::ConfigError),
}
