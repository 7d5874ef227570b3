//! Access-log line parsing.
//!
//! Only three things are taken from a line:
//!
//! ```text
//! 10.0.0.1 - - [20/Nov/2022:02:27:49 +0000] "GET / HTTP/1.1" 200 100
//! ^address      ^timestamp                   ^payload
//! ```

use chrono::DateTime;

use crate::schema::{LogTimestamp, ParsedRecord};

/// Timestamp layout of Common/Combined Log Format lines.
pub const ACCESS_LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Placeholder used by web servers for an absent field.
const PLACEHOLDER: &str = "-";

/// Whether the bracketed timestamp is parsed or ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampMode {
    /// Parse the timestamp and reject lines where it is malformed.
    #[default]
    Parse,
    /// Skip timestamp parsing (live input). Records carry no timestamp.
    Ignore,
}

/// Per-line parse failures. None of these are fatal to a playback run.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No client IP address")]
    MissingAddress,
    #[error("No bracketed timestamp")]
    MissingTimestamp,
    #[error("Invalid timestamp {raw:?}: {source}")]
    TimestampParse {
        raw: String,
        source: chrono::ParseError,
    },
}

/// Splits access-log lines into [`ParsedRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser {
    mode: TimestampMode,
}

impl LineParser {
    pub fn new(mode: TimestampMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TimestampMode {
        self.mode
    }

    /// Parse one log line.
    pub fn parse(&self, line: &str) -> Result<ParsedRecord, ParseError> {
        // address, ident, user, rest-of-line
        let mut fields = line.splitn(4, ' ');
        let address = fields.next().unwrap_or_default();
        if address == PLACEHOLDER || address.trim().is_empty() {
            return Err(ParseError::MissingAddress);
        }
        let rest = fields.nth(2);

        let (raw_time, after) = match rest.and_then(|r| r.split_once(']')) {
            Some(parts) => parts,
            None if self.mode == TimestampMode::Ignore => ("", rest.unwrap_or_default()),
            None => return Err(ParseError::MissingTimestamp),
        };

        let timestamp = match self.mode {
            TimestampMode::Parse => Some(parse_timestamp(raw_time)?),
            TimestampMode::Ignore => None,
        };

        Ok(ParsedRecord {
            address: address.to_string(),
            timestamp,
            payload: extract_payload(after).to_string(),
        })
    }
}

/// Parse the `[day/Mon/year:hh:mm:ss +zzzz` part of a line. The leading `[` is optional.
pub fn parse_timestamp(raw: &str) -> Result<LogTimestamp, ParseError> {
    let text = raw.strip_prefix('[').unwrap_or(raw);
    DateTime::parse_from_str(text, ACCESS_LOG_TIME_FORMAT).map_err(|source| {
        ParseError::TimestampParse {
            raw: text.to_string(),
            source,
        }
    })
}

/// Contents of the first quoted segment, or the whole trimmed text if there is none.
fn extract_payload(text: &str) -> &str {
    let Some(start) = text.find('"') else {
        return text.trim();
    };
    let quoted = &text[start + 1..];
    match quoted.find('"') {
        Some(end) => &quoted[..end],
        None => quoted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = r#"10.0.0.1 - - [20/Nov/2022:02:27:49 +0000] "GET / HTTP/1.1" 200 100"#;

    #[test]
    fn test_parse_common_log_line() {
        let record = LineParser::default().parse(LINE).unwrap();
        assert_eq!(record.address, "10.0.0.1");
        assert_eq!(
            record.timestamp,
            Some(DateTime::parse_from_rfc3339("2022-11-20T02:27:49+00:00").unwrap())
        );
        assert_eq!(record.payload, "GET / HTTP/1.1");
    }

    #[test]
    fn test_parse_combined_log_line() {
        let line = r#"192.168.1.20 - frank [10/Oct/2000:13:55:36 -0700] "POST /api/v1/data HTTP/1.1" 201 1024 "-" "curl/7.68.0""#;
        let record = LineParser::default().parse(line).unwrap();
        assert_eq!(record.address, "192.168.1.20");
        assert_eq!(record.payload, "POST /api/v1/data HTTP/1.1");
        let ts = record.timestamp.unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(ts.to_rfc3339(), "2000-10-10T13:55:36-07:00");
    }

    #[test]
    fn test_placeholder_address() {
        let line = r#"- - - [20/Nov/2022:02:27:49 +0000] "GET / HTTP/1.1" 200 100"#;
        assert!(matches!(LineParser::default().parse(line), Err(ParseError::MissingAddress)));
    }

    #[test]
    fn test_blank_line() {
        assert!(matches!(LineParser::default().parse(""), Err(ParseError::MissingAddress)));
        assert!(matches!(
            LineParser::new(TimestampMode::Ignore).parse(""),
            Err(ParseError::MissingAddress)
        ));
    }

    #[test]
    fn test_leading_space_is_missing_address() {
        assert!(matches!(
            LineParser::default().parse(" 10.0.0.1 - - [x]"),
            Err(ParseError::MissingAddress)
        ));
    }

    #[test]
    fn test_malformed_timestamp() {
        let line = r#"10.0.0.1 - - [2022-11-20 02:27:49] "GET / HTTP/1.1" 200 100"#;
        match LineParser::default().parse(line) {
            Err(ParseError::TimestampParse { raw, .. }) => assert_eq!(raw, "2022-11-20 02:27:49"),
            other => panic!("expected timestamp error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_line() {
        assert!(matches!(
            LineParser::default().parse("10.0.0.1 - -"),
            Err(ParseError::MissingTimestamp)
        ));
        assert!(matches!(
            LineParser::default().parse(r#"10.0.0.1 - - "GET / HTTP/1.1""#),
            Err(ParseError::MissingTimestamp)
        ));
    }

    #[test]
    fn test_ignore_mode_skips_timestamp() {
        let parser = LineParser::new(TimestampMode::Ignore);
        let record = parser.parse(LINE).unwrap();
        assert_eq!(record.timestamp, None);
        assert_eq!(record.payload, "GET / HTTP/1.1");

        // A garbage timestamp is fine when it is not parsed.
        let record = parser.parse(r#"10.0.0.1 - - [yesterday] "GET /x HTTP/1.0" 200 1"#).unwrap();
        assert_eq!(record.payload, "GET /x HTTP/1.0");

        let record = parser.parse("10.0.0.1").unwrap();
        assert_eq!(record.address, "10.0.0.1");
        assert_eq!(record.payload, "");
    }

    #[test]
    fn test_payload_without_quotes() {
        let line = "10.0.0.1 - - [20/Nov/2022:02:27:49 +0000] GET / 200";
        let record = LineParser::default().parse(line).unwrap();
        assert_eq!(record.payload, "GET / 200");
    }

    #[test]
    fn test_payload_unterminated_quote() {
        let line = r#"10.0.0.1 - - [20/Nov/2022:02:27:49 +0000] "GET /truncated"#;
        let record = LineParser::default().parse(line).unwrap();
        assert_eq!(record.payload, "GET /truncated");
    }

    #[test]
    fn test_parse_timestamp_without_bracket() {
        let a = parse_timestamp("[20/Nov/2022:02:27:49 +0000").unwrap();
        let b = parse_timestamp("20/Nov/2022:02:27:49 +0000").unwrap();
        assert_eq!(a, b);
    }
}
