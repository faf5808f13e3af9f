//! Heartbeat events - a single liveness signal from a service.

use chrono::{DateTime, Utc};

/// A validated heartbeat.
///
/// The service name is always trimmed and never empty; construction goes
/// through [`HeartbeatEvent::new`], which enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeartbeatEvent {
    service: String,
    instant: DateTime<Utc>,
}

impl HeartbeatEvent {
    /// Create an event, trimming the service name.
    ///
    /// Returns `None` if the service name is blank.
    pub fn new(service: &str, instant: DateTime<Utc>) -> Option<Self> {
        let service = service.trim();
        if service.is_empty() {
            return None;
        }
        Some(Self {
            service: service.to_string(),
            instant,
        })
    }

    /// The (trimmed) service name.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// When the heartbeat was observed.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Split into the service name and instant.
    pub fn into_parts(self) -> (String, DateTime<Utc>) {
        (self.service, self.instant)
    }
}
