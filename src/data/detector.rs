//! Miss-streak detection.
//!
//! For each service the detector replays the implied schedule of expected
//! heartbeats. Starting one interval after the first heartbeat, every
//! expected slot that passes strictly before the next real heartbeat is a
//! miss. A heartbeat at or before the expected slot resets the streak and
//! re-bases the schedule on that heartbeat. The first time the streak
//! reaches `allowed_misses` an alert is raised at that slot and the service
//! is done for the run.

use chrono::TimeDelta;
use heartwatch_types::{format_timestamp, Alert, ServiceTimeline, Timelines};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Validated detection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionPolicy {
    expected_interval: TimeDelta,
    allowed_misses: u32,
}

impl DetectionPolicy {
    /// Build a policy from an interval in seconds and a miss threshold.
    ///
    /// The interval is held in whole milliseconds, truncated. Non-finite or
    /// non-positive intervals, intervals below one millisecond, intervals
    /// wider than `TimeDelta` can hold and a zero threshold are rejected.
    pub fn new(expected_interval_secs: f64, allowed_misses: u32) -> Result<Self, ConfigError> {
        if !expected_interval_secs.is_finite() || expected_interval_secs <= 0.0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "expected interval must be a positive number of seconds, got {expected_interval_secs}"
            )));
        }

        let millis = (expected_interval_secs * 1000.0).trunc();
        if millis < 1.0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "expected interval of {expected_interval_secs}s is below millisecond resolution"
            )));
        }

        // `as i64` saturates, so the range check has to happen in f64
        let out_of_range = || {
            ConfigError::InvalidConfiguration(format!(
                "expected interval of {expected_interval_secs}s is out of range"
            ))
        };
        if millis >= TimeDelta::MAX.num_milliseconds() as f64 {
            return Err(out_of_range());
        }
        let expected_interval =
            TimeDelta::try_milliseconds(millis as i64).ok_or_else(out_of_range)?;

        if allowed_misses == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "allowed misses must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            expected_interval,
            allowed_misses,
        })
    }

    /// Time between expected heartbeats.
    pub fn expected_interval(&self) -> TimeDelta {
        self.expected_interval
    }

    /// Consecutive misses that raise an alert.
    pub fn allowed_misses(&self) -> u32 {
        self.allowed_misses
    }
}

/// Detect at most one alert per service, in service name order.
pub fn detect_alerts(timelines: &Timelines, policy: &DetectionPolicy) -> Vec<Alert> {
    timelines
        .values()
        .filter_map(|timeline| {
            let alert = detect_service(timeline, policy);
            match &alert {
                Some(alert) => info!(
                    service = %alert.service,
                    alert_at = %format_timestamp(&alert.alert_at),
                    "miss threshold reached"
                ),
                None => debug!(
                    service = timeline.service(),
                    heartbeats = timeline.len(),
                    "no sustained outage"
                ),
            }
            alert
        })
        .collect()
}

/// Walk one timeline and return the first alert, if any.
///
/// Timelines with fewer than two heartbeats never alert: there is no later
/// heartbeat to measure a gap against. If advancing the schedule would
/// overflow the representable range the walk stops without an alert.
pub fn detect_service(timeline: &ServiceTimeline, policy: &DetectionPolicy) -> Option<Alert> {
    let (first, rest) = timeline.instants().split_first()?;
    let interval = policy.expected_interval;

    let mut miss_streak = 0;
    let mut expected_next = first.checked_add_signed(interval)?;

    for actual in rest {
        while expected_next < *actual {
            miss_streak += 1;
            if miss_streak == policy.allowed_misses {
                return Some(Alert::new(timeline.service(), expected_next));
            }
            expected_next = expected_next.checked_add_signed(interval)?;
        }

        miss_streak = 0;
        expected_next = actual.checked_add_signed(interval)?;
    }

    None
}
