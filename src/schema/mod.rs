//! Schema module - Configuration and record types shared across the pipeline.

mod config;
mod record;

pub use config::*;
pub use record::*;
