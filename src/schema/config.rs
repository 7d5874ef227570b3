//! Configuration types for log playback.

use std::fs;
use std::net::Ipv6Addr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_speed() -> f64 {
    1.0
}

fn default_columns() -> u32 {
    100
}

fn default_rows() -> u32 {
    100
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3051
}

fn default_timeout_secs() -> u64 {
    10
}

/// Top-level playback configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Playback speed factor. 1.0 is realtime, 0 or less disables pacing.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Width of the Life world in cells.
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Height of the Life world in cells.
    #[serde(default = "default_rows")]
    pub rows: u32,
    /// Life server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Life server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout for pattern delivery, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            columns: default_columns(),
            rows: default_rows(),
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlaybackConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Base URL of the Life server. IPv6 literals are bracketed.
    pub fn endpoint(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when timestamps should translate into real delays.
    #[inline]
    pub fn is_paced(&self) -> bool {
        self.speed > 0.0
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.speed.is_nan() {
            return Err(ConfigError::InvalidSpeed);
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("World dimensions (columns, rows) must be non-zero")]
    InvalidDimensions,
    #[error("Delivery timeout must be non-zero")]
    InvalidTimeout,
    #[error("Playback speed must be a number")]
    InvalidSpeed,
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
