//! Service timelines - every heartbeat seen for one service, in order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// All timelines of a run, keyed by service name.
///
/// A `BTreeMap` so that iteration (and therefore alert output) follows
/// service name order.
pub type Timelines = BTreeMap<String, ServiceTimeline>;

/// The heartbeats observed for a single service, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTimeline {
    service: String,
    instants: Vec<DateTime<Utc>>,
}

impl ServiceTimeline {
    /// Build a timeline from instants in any order.
    ///
    /// Equal instants keep no particular relative order.
    pub fn new(service: impl Into<String>, mut instants: Vec<DateTime<Utc>>) -> Self {
        instants.sort_unstable();
        Self {
            service: service.into(),
            instants,
        }
    }

    /// The service this timeline belongs to.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Observed instants, ascending.
    pub fn instants(&self) -> &[DateTime<Utc>] {
        &self.instants
    }

    /// Earliest heartbeat, if any.
    pub fn first(&self) -> Option<DateTime<Utc>> {
        self.instants.first().copied()
    }

    /// Latest heartbeat, if any.
    pub fn last(&self) -> Option<DateTime<Utc>> {
        self.instants.last().copied()
    }

    /// Number of heartbeats.
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// Check if the timeline has no heartbeats.
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 4, 10, minute, 0).unwrap()
    }

    #[test]
    fn sorts_on_construction() {
        let timeline = ServiceTimeline::new("push", vec![at(3), at(1), at(0)]);
        assert_eq!(timeline.instants(), &[at(0), at(1), at(3)]);
        assert_eq!(timeline.first(), Some(at(0)));
        assert_eq!(timeline.last(), Some(at(3)));
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn keeps_duplicates() {
        let timeline = ServiceTimeline::new("push", vec![at(2), at(1), at(2)]);
        assert_eq!(timeline.instants(), &[at(1), at(2), at(2)]);
    }

    #[test]
    fn empty_timeline() {
        let timeline = ServiceTimeline::new("idle", Vec::new());
        assert!(timeline.is_empty());
        assert_eq!(timeline.first(), None);
        assert_eq!(timeline.service(), "idle");
    }
}
