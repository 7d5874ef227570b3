//! Life 1.05 pattern documents.
//!
//! ```text
//! #Life 1.05
//! #D log2life ouput
//! #N
//! #P <x> <y>
//! ........   (8 rows of 8 cells, '*' alive, '.' dead)
//! ```

use std::fmt;

use super::address::map_to_coordinate;
use super::fingerprint::{FINGERPRINT_LEN, Fingerprint};
use crate::schema::{Coordinate, ParsedRecord};

/// Format tag line.
pub const LIFE105_TAG: &str = "#Life 1.05";

/// Description line. The spelling is what existing Life servers already receive.
pub const LIFE105_DESCRIPTION: &str = "#D log2life ouput";

/// Name line (left empty).
pub const LIFE105_NAME: &str = "#N";

/// Number of header lines preceding the cell rows.
pub const HEADER_LINES: usize = 4;

const ALIVE: char = '*';
const DEAD: char = '.';

/// An 8x8 pattern positioned in the Life world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Life105Pattern {
    pub origin: Coordinate,
    pub cells: Fingerprint,
}

impl Life105Pattern {
    pub fn new(origin: Coordinate, cells: Fingerprint) -> Self {
        Self { origin, cells }
    }

    /// Build the pattern for a parsed log line in a `width` x `height` world.
    pub fn from_record(record: &ParsedRecord, width: u32, height: u32) -> Self {
        Self {
            origin: map_to_coordinate(&record.address, width, height),
            cells: Fingerprint::from(record.payload.as_str()),
        }
    }

    /// Header lines followed by one line per fingerprint byte.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(HEADER_LINES + FINGERPRINT_LEN);
        lines.push(LIFE105_TAG.to_string());
        lines.push(LIFE105_DESCRIPTION.to_string());
        lines.push(LIFE105_NAME.to_string());
        lines.push(format!("#P {}", self.origin));

        for row in 0..FINGERPRINT_LEN {
            lines.push(self.row(row));
        }
        lines
    }

    /// Render one row, most significant bit first.
    pub fn row(&self, row: usize) -> String {
        (0..8)
            .map(|col| if self.cells.is_alive(row, col) { ALIVE } else { DEAD })
            .collect()
    }

    /// The document sent to the Life server: lines joined by `\n`, no trailing newline.
    pub fn to_document(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for Life105Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_document())
    }
}
