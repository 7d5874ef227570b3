//! The playback loop: line in, paced pattern out.

use std::io::{self, BufRead, Write};
use std::thread;

use super::scheduler::PlaybackScheduler;
use super::transport::PatternSink;
use crate::ingest::{LineParser, TimestampMode};
use crate::pattern::Life105Pattern;
use crate::schema::PlaybackConfig;

/// Failures that end a playback run.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Failed to open {path}: {source}")]
    OpenInput { path: String, source: io::Error },
    #[error("Failed to read input: {0}")]
    StreamRead(#[source] io::Error),
}

/// Counters for one playback run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Lines read from the input.
    pub lines: u64,
    /// Patterns accepted by the sink.
    pub sent: u64,
    /// Lines skipped because they could not be parsed.
    pub parse_failures: u64,
    /// Patterns the sink failed to deliver.
    pub delivery_failures: u64,
}

/// Replays log lines through a [`PatternSink`], one line at a time.
///
/// Each rendered pattern is also written to `echo`. A line that fails to
/// parse or deliver is logged and counted, and a failed echo write is only
/// logged; a failure of the input stream is the one thing that stops the run.
///
/// Usage:
/// ```ignore
/// let transport = HttpTransport::new(&config)?;
/// let mut player = Player::new(&config, TimestampMode::Parse, transport, io::stdout());
/// let stats = player.run(source.open()?)?;
/// ```
pub struct Player<S, W> {
    parser: LineParser,
    scheduler: PlaybackScheduler,
    columns: u32,
    rows: u32,
    sink: S,
    echo: W,
}

impl<S: PatternSink, W: Write> Player<S, W> {
    pub fn new(config: &PlaybackConfig, mode: TimestampMode, sink: S, echo: W) -> Self {
        Self {
            parser: LineParser::new(mode),
            scheduler: PlaybackScheduler::new(config.speed),
            columns: config.columns,
            rows: config.rows,
            sink,
            echo,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (S, W) {
        (self.sink, self.echo)
    }

    /// Play every line of `reader` until end of input.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<PlaybackStats, PlaybackError> {
        let mut stats = PlaybackStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(PlaybackError::StreamRead)?;
            if n == 0 {
                break;
            }

            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            self.play_line(&line, &mut stats)?;
        }

        Ok(stats)
    }

    /// Parse, pace, render and deliver a single line.
    pub fn play_line(&mut self, line: &str, stats: &mut PlaybackStats) -> Result<(), PlaybackError> {
        stats.lines += 1;

        let record = match self.parser.parse(line) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping line {}: {}", stats.lines, e);
                stats.parse_failures += 1;
                return Ok(());
            }
        };

        let delay = self.scheduler.advance(record.timestamp);
        if !delay.is_zero() {
            log::info!("delaying {:?}", delay);
            thread::sleep(delay);
        }

        let pattern = Life105Pattern::from_record(&record, self.columns, self.rows);
        if let Err(e) = writeln!(self.echo, "{pattern}") {
            log::warn!("Failed to echo pattern for line {}: {}", stats.lines, e);
        }

        match self.sink.deliver(&pattern) {
            Ok(()) => {
                log::debug!("Delivered pattern at {} for {}", pattern.origin, record.address);
                stats.sent += 1;
            }
            Err(e) => {
                log::warn!("ERROR: {}", e);
                stats.delivery_failures += 1;
            }
        }
        Ok(())
    }
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
