//! Grouping of events into per-service timelines.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use heartwatch_types::{HeartbeatEvent, ServiceTimeline, Timelines};

/// Partition events by service and sort each partition by instant.
///
/// Services are matched exactly (case-sensitive). Only services with at
/// least one event appear in the result.
pub fn group_events<I>(events: I) -> Timelines
where
    I: IntoIterator<Item = HeartbeatEvent>,
{
    let mut grouped: BTreeMap<String, Vec<DateTime<Utc>>> = BTreeMap::new();

    for event in events {
        let (service, instant) = event.into_parts();
        grouped.entry(service).or_default().push(instant);
    }

    grouped
        .into_iter()
        .map(|(service, instants)| {
            let timeline = ServiceTimeline::new(service.clone(), instants);
            (service, timeline)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartwatch_types::format_timestamp;

    use crate::data::timestamp::parse_timestamp;

    fn event(service: &str, ts: &str) -> HeartbeatEvent {
        HeartbeatEvent::new(service, parse_timestamp(ts).unwrap()).unwrap()
    }

    fn rendered(timeline: &ServiceTimeline) -> Vec<String> {
        timeline.instants().iter().map(format_timestamp).collect()
    }

    #[test]
    fn test_unordered_input_is_sorted() {
        let events = vec![
            event("push", "2025-08-04T10:03:00.000Z"),
            event("push", "2025-08-04T10:01:00.000Z"),
            event("push", "2025-08-04T10:00:00.000Z"),
        ];

        let grouped = group_events(events);
        let push = grouped.get("push").unwrap();
        assert_eq!(
            rendered(push),
            [
                "2025-08-04T10:00:00.000Z",
                "2025-08-04T10:01:00.000Z",
                "2025-08-04T10:03:00.000Z",
            ]
        );
    }

    #[test]
    fn test_partitions_by_service() {
        let events = vec![
            event("email", "2025-08-04T10:00:00.000Z"),
            event("sms", "2025-08-04T10:00:30.000Z"),
            event("email", "2025-08-04T10:01:00.000Z"),
            event("Email", "2025-08-04T10:02:00.000Z"),
        ];

        let grouped = group_events(events);
        let services: Vec<_> = grouped.keys().map(String::as_str).collect();
        assert_eq!(services, ["Email", "email", "sms"]);
        assert_eq!(grouped["email"].len(), 2);
        assert_eq!(grouped["sms"].len(), 1);
        assert_eq!(grouped["Email"].service(), "Email");
    }

    #[test]
    fn test_grouping_is_order_independent() {
        let events = vec![
            event("a", "2025-08-04T10:05:00.000Z"),
            event("b", "2025-08-04T10:00:00.000Z"),
            event("a", "2025-08-04T10:00:00.000Z"),
            event("a", "2025-08-04T10:02:00.000Z"),
            event("b", "2025-08-04T09:59:00.000Z"),
        ];

        let forward = group_events(events.clone());
        let reversed = group_events(events.iter().rev().cloned());
        let mut rotated = events.clone();
        rotated.rotate_left(2);
        let rotated = group_events(rotated);

        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn test_no_events() {
        assert!(group_events(Vec::new()).is_empty());
    }
}
