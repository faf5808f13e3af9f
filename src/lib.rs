//! # heartwatch
//!
//! Detects sustained service outages from a batch of heartbeat records.
//!
//! Each service is expected to send a heartbeat every
//! `expected_interval_seconds`. heartwatch reconstructs the schedule of
//! expected heartbeats between the ones that actually arrived and raises
//! one alert per service at the first slot where `allowed_misses`
//! consecutive heartbeats have gone missing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌────────────┐    ┌──────────┐
//! │  source  │───▶│ group_events │───▶│  detector  │───▶│  report  │
//! │ (records)│    │ (timelines)  │    │ (alerts)   │    │  (JSON)  │
//! └──────────┘    └──────────────┘    └────────────┘    └──────────┘
//! ```
//!
//! - **[`source`]**: [`EventSource`] trait with [`FileSource`] and
//!   [`ReaderSource`]; validates records and drops malformed ones
//! - **[`data`]**: timestamp parsing, grouping into [`Timelines`] and
//!   miss-streak detection under a [`DetectionPolicy`]
//! - **[`settings`]**: layered configuration (defaults, file, environment)
//! - **[`report`]**: JSON rendering of alerts
//!
//! Every stage produces a new value; nothing is shared or mutated between
//! stages.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: events.json, 60s interval, 3 allowed misses
//! heartwatch
//!
//! # Explicit parameters, reading from stdin
//! cat events.json | heartwatch --file - --interval 30 --allowed-misses 5
//! ```
//!
//! ### As a library
//!
//! ```
//! use heartwatch::{detect_alerts, group_events, parse_events, DetectionPolicy};
//! use heartwatch_types::format_timestamp;
//!
//! let batch = parse_events(r#"[
//!     { "service": "email", "timestamp": "2025-08-04T10:00:00.000Z" },
//!     { "service": "email", "timestamp": "2025-08-04T10:04:00.000Z" }
//! ]"#)?;
//!
//! let timelines = group_events(batch.events);
//! let policy = DetectionPolicy::new(60.0, 3)?;
//! let alerts = detect_alerts(&timelines, &policy);
//!
//! assert_eq!(alerts.len(), 1);
//! assert_eq!(format_timestamp(&alerts[0].alert_at), "2025-08-04T10:03:00.000Z");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod data;
pub mod error;
pub mod report;
pub mod settings;
pub mod source;

pub use data::{
    detect_alerts, detect_service, group_events, parse_timestamp, parse_timestamp_value,
    DetectionPolicy,
};
pub use error::{ConfigError, LoadError, RecordError, TimestampError};
pub use heartwatch_types::{Alert, HeartbeatEvent, ServiceTimeline, Timelines};
pub use settings::Settings;
pub use source::{parse_events, validate_record, EventBatch, EventSource, FileSource, ReaderSource};
