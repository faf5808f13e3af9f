//! Record validation.
//!
//! Turns a JSON array of loosely-shaped records into validated
//! [`HeartbeatEvent`]s. Bad records are dropped, never reported as errors.

use heartwatch_types::HeartbeatEvent;
use serde_json::Value;
use tracing::debug;

use crate::data::timestamp::parse_timestamp_value;
use crate::error::{LoadError, RecordError};

/// The outcome of loading one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBatch {
    /// Valid events, in input order.
    pub events: Vec<HeartbeatEvent>,
    /// Number of records that were dropped.
    pub dropped: usize,
}

impl EventBatch {
    /// Number of valid events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no record survived validation.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Validate one record.
///
/// A record is kept iff it is an object with a non-blank string `service`
/// and a `timestamp` string that parses.
pub fn validate_record(record: &Value) -> Result<HeartbeatEvent, RecordError> {
    let fields = record.as_object().ok_or(RecordError::NotAnObject)?;

    let service = fields
        .get("service")
        .and_then(Value::as_str)
        .ok_or(RecordError::InvalidService)?;

    let timestamp = fields.get("timestamp").ok_or(RecordError::MissingTimestamp)?;
    let instant = parse_timestamp_value(timestamp)?;

    HeartbeatEvent::new(service, instant).ok_or(RecordError::InvalidService)
}

/// Parse a JSON document into a batch of events.
///
/// Fails with [`LoadError::MalformedInput`] if the document is not JSON or
/// not an array; individual bad records only bump `dropped`.
pub fn parse_events(content: &str) -> Result<EventBatch, LoadError> {
    let document: Value = serde_json::from_str(content)
        .map_err(|_| LoadError::MalformedInput("events file is not valid JSON".to_string()))?;

    let Value::Array(records) = document else {
        return Err(LoadError::MalformedInput(
            "events file must contain a JSON array".to_string(),
        ));
    };

    let mut batch = EventBatch::default();
    for (index, record) in records.iter().enumerate() {
        match validate_record(record) {
            Ok(event) => batch.events.push(event),
            Err(reason) => {
                debug!(index, %reason, "dropping record");
                batch.dropped += 1;
            }
        }
    }

    Ok(batch)
}
