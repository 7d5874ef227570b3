//! Paced playback of access logs to a Life server.
//!
//! Lines are handled strictly in input order. Before a line's pattern is
//! sent, the loop sleeps for the gap between its timestamp and the previous
//! line's timestamp, divided by the configured speed:
//!
//! ```text
//! line N   parse -> render -> echo -> deliver
//!          sleep((ts[N+1] - ts[N]) / speed)
//! line N+1 parse -> render -> echo -> deliver
//! ```

mod player;
mod scheduler;
mod transport;

pub use player::{PlaybackError, PlaybackStats, Player};
pub use scheduler::{PlaybackScheduler, next_delay};
pub use transport::{HttpTransport, PatternSink, TransportError};
