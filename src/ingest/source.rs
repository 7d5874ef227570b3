//! Input selection: a log file, or standard input for live playback.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use super::line::TimestampMode;

/// Token that selects standard input instead of a file.
pub const STDIN_TOKEN: &str = "-";

/// Where log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_TOKEN {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Live input is forwarded as it arrives, without timestamp pacing.
    pub fn is_live(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }

    /// Timestamp handling appropriate for this source.
    pub fn timestamp_mode(&self) -> TimestampMode {
        if self.is_live() {
            TimestampMode::Ignore
        } else {
            TimestampMode::Parse
        }
    }

    /// Open the source as a buffered line reader.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("/var/log/nginx/access.log"),
            InputSource::File(PathBuf::from("/var/log/nginx/access.log"))
        );
    }

    #[test]
    fn test_stdin_is_live() {
        assert!(InputSource::Stdin.is_live());
        assert_eq!(InputSource::Stdin.timestamp_mode(), TimestampMode::Ignore);
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");

        let file = InputSource::from_arg("access.log");
        assert!(!file.is_live());
        assert_eq!(file.timestamp_mode(), TimestampMode::Parse);
        assert_eq!(file.to_string(), "access.log");
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        let lines: Vec<String> = source.open().unwrap().lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = InputSource::File(dir.path().join("missing.log"));
        assert!(source.open().is_err());
    }
}
