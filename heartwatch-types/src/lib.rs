//! # heartwatch-types
//!
//! Core types for heartbeat outage detection. This crate defines the data
//! that flows between the stages of a heartwatch run: validated heartbeat
//! events, per-service timelines and the alerts raised from them.
//!
//! ## Features
//!
//! - `serde`: JSON serialization via serde. Alerts serialize as
//!   `{ "service": .., "alert_at": "YYYY-MM-DDTHH:mm:ss.sssZ" }`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use heartwatch_types::{HeartbeatEvent, ServiceTimeline};
//!
//! let first = Utc.with_ymd_and_hms(2025, 8, 4, 10, 1, 0).unwrap();
//! let second = Utc.with_ymd_and_hms(2025, 8, 4, 10, 0, 0).unwrap();
//!
//! let event = HeartbeatEvent::new("  email ", first).unwrap();
//! assert_eq!(event.service(), "email");
//!
//! let timeline = ServiceTimeline::new("email", vec![first, second]);
//! assert_eq!(timeline.first(), Some(second));
//! ```

mod alert;
mod event;
mod format;
mod timeline;

pub use alert::*;
pub use event::*;
pub use format::*;
pub use timeline::*;
