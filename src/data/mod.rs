//! Timeline reconstruction and outage detection.
//!
//! ## Submodules
//!
//! - [`timestamp`]: Parsing of timestamp strings into UTC instants
//! - [`grouping`]: Partitioning events into per-service sorted timelines
//! - [`detector`]: Miss-streak detection ([`DetectionPolicy`], [`detect_alerts`])
//!
//! ## Data Flow
//!
//! ```text
//! Vec<HeartbeatEvent> (validated)
//!        │
//!        ▼
//! group_events()
//!        │
//!        ▼
//! Timelines (service -> sorted instants)
//!        │
//!        ▼
//! detect_alerts(&DetectionPolicy)
//!        │
//!        ▼
//! Vec<Alert> (at most one per service)
//! ```

pub mod detector;
pub mod grouping;
pub mod timestamp;

pub use detector::{detect_alerts, detect_service, DetectionPolicy};
pub use grouping::group_events;
pub use timestamp::{parse_timestamp, parse_timestamp_value};
