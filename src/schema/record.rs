//! Record types produced while turning a log line into a pattern.

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Timestamp carried by an access-log line, with its original UTC offset.
pub type LogTimestamp = DateTime<FixedOffset>;

/// Position of a pattern in the Life world, (0, 0) being the middle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// The fields of one access-log line that drive pattern generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    /// Client address token, exactly as it appeared in the line.
    pub address: String,
    /// Request timestamp. `None` when timestamp parsing is disabled.
    pub timestamp: Option<LogTimestamp>,
    /// Quoted request string with the quotes stripped.
    pub payload: String,
}
