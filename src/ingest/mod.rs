//! Ingest module - Reading access-log input and splitting it into records.

mod line;
mod source;

pub use line::*;
pub use source::*;
