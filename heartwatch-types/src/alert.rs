//! Alerts - where a service's miss streak first reached the threshold.

use core::fmt;

use chrono::{DateTime, Utc};

use crate::format_timestamp;

/// An outage alert for one service.
///
/// `alert_at` is the expected-but-missing heartbeat slot that completed the
/// miss streak, not the time the next real heartbeat showed up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    /// Service that went quiet.
    pub service: String,

    /// The missing slot that reached the threshold.
    #[cfg_attr(feature = "serde", serde(with = "crate::format::millis_utc"))]
    pub alert_at: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert.
    pub fn new(service: impl Into<String>, alert_at: DateTime<Utc>) -> Self {
        Self {
            service: service.into(),
            alert_at,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} missed heartbeats, alert at {}",
            self.service,
            format_timestamp(&self.alert_at)
        )
    }
}
