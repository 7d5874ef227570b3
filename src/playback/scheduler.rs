//! Timestamp-driven pacing.

use std::time::Duration;

use crate::schema::LogTimestamp;

/// Delay before handling `current`, given the previous record's timestamp.
///
/// The gap between the two log timestamps is divided by `speed`. Negative
/// gaps, a missing previous timestamp, and `speed <= 0` all yield zero.
pub fn next_delay(previous: Option<LogTimestamp>, current: LogTimestamp, speed: f64) -> Duration {
    let Some(previous) = previous else {
        return Duration::ZERO;
    };
    if speed.is_nan() || speed <= 0.0 {
        return Duration::ZERO;
    }

    let micros = current
        .signed_duration_since(previous)
        .num_microseconds()
        .unwrap_or(i64::MAX);
    if micros <= 0 {
        return Duration::ZERO;
    }

    Duration::from_micros((micros as f64 / speed) as u64)
}

/// Tracks the last seen timestamp of a single input stream.
///
/// Processing time is not subtracted from the computed delays; the gaps
/// between input timestamps are replayed as-is.
#[derive(Debug, Clone)]
pub struct PlaybackScheduler {
    speed: f64,
    last: Option<LogTimestamp>,
}

impl PlaybackScheduler {
    pub fn new(speed: f64) -> Self {
        Self { speed, last: None }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn last_timestamp(&self) -> Option<LogTimestamp> {
        self.last
    }

    /// Record `timestamp` and return how long to wait before handling it.
    ///
    /// Records without a timestamp never wait and leave the state untouched.
    pub fn advance(&mut self, timestamp: Option<LogTimestamp>) -> Duration {
        let Some(current) = timestamp else {
            return Duration::ZERO;
        };
        let delay = next_delay(self.last, current, self.speed);
        self.last = Some(current);
        delay
    }
}
