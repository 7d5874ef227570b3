//! log2life - Replay web-server access logs as Game of Life patterns.
//!
//! Every access-log line becomes an 8x8 Life 1.05 pattern. The client
//! address picks where the pattern lands in the world and the request line
//! is XOR-folded into the cells. Patterns are POSTed to a Life server,
//! paced by the original log timestamps.
//!
//! # Architecture
//!
//! - `schema`: Configuration and record types
//! - `ingest`: Input selection and access-log line parsing
//! - `pattern`: Address mapping, payload folding and Life 1.05 rendering
//! - `playback`: Timestamp pacing, delivery and the playback loop
//!
//! # Example
//!
//! ```rust,no_run
//! use log2life::{
//!     ingest::InputSource,
//!     playback::{HttpTransport, Player},
//!     schema::PlaybackConfig,
//! };
//!
//! let config = PlaybackConfig::default();
//! let source = InputSource::from_arg("access.log");
//!
//! let transport = HttpTransport::new(&config).unwrap();
//! let mut player = Player::new(&config, source.timestamp_mode(), transport, std::io::stdout());
//! let stats = player.run(source.open().unwrap()).unwrap();
//!
//! println!("Sent {} patterns", stats.sent);
//! ```

pub mod ingest;
pub mod pattern;
pub mod playback;
pub mod schema;

// Re-export commonly used types
pub use ingest::{InputSource, LineParser, ParseError, TimestampMode};
pub use pattern::{Fingerprint, Life105Pattern, map_to_coordinate};
pub use playback::{HttpTransport, PatternSink, PlaybackStats, Player, TransportError};
pub use schema::{Coordinate, ParsedRecord, PlaybackConfig};
