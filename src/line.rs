use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Removes ANSI/VT100 escape sequences: `ESC` followed either by a single
/// command byte or by a CSI sequence terminated by a byte in `@`..=`~`.
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    regex!(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").replace_all(line, "")
}

/// Parses the ISO-8601 UTC timestamp at the very start of an already
/// cleaned line, e.g. `2025-09-29T22:22:37.272569Z`.
pub fn leading_timestamp(clean: &str) -> Option<DateTime<Utc>> {
    let m = regex!(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d+Z").find(clean)?;
    DateTime::parse_from_rfc3339(m.as_str())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Strips escapes from a raw line and extracts its leading timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    leading_timestamp(&strip_ansi(raw))
}

/// A raw log line after escape stripping.
#[derive(Debug)]
pub struct LogLine<'a> {
    pub timestamp: Option<DateTime<Utc>>,
    pub text: Cow<'a, str>,
}

impl<'a> LogLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let text = strip_ansi(raw);
        let timestamp = leading_timestamp(&text);
        LogLine { timestamp, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn expected_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 29, 22, 22, 37).unwrap()
            + chrono::Duration::microseconds(272_569)
    }

    #[test]
    fn test_plain_timestamp() {
        let line = "2025-09-29T22:22:37.272569Z  INFO reth::cli: Built payload";
        assert_eq!(parse_timestamp(line), Some(expected_instant()));
    }

    #[test]
    fn test_colored_timestamp() {
        let line = "\x1b[2m2025-09-29T22:22:37.272569Z\x1b[0m \x1b[32m INFO\x1b[0m Built payload";
        assert_eq!(parse_timestamp(line), Some(expected_instant()));
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(parse_timestamp("INFO Built payload elapsed=1ms"), None);
        assert_eq!(parse_timestamp(""), None);
        // must be at the start of the line
        assert_eq!(
            parse_timestamp("prefix 2025-09-29T22:22:37.272569Z INFO"),
            None
        );
        // the UTC designator is required
        assert_eq!(parse_timestamp("2025-09-29T22:22:37.272569+00:00 INFO"), None);
    }

    #[test]
    fn test_strip_ansi() {
        let raw = "\x1b[3mparent_number\x1b[0m\x1b[2m=\x1b[0m10 \x1bMdone";
        assert_eq!(strip_ansi(raw), "parent_number=10 done");
        assert!(matches!(strip_ansi("no escapes"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_log_line_parse() {
        let line = LogLine::parse("\x1b[2m2025-09-29T22:22:37.272569Z\x1b[0m Built payload");
        assert_eq!(line.timestamp, Some(expected_instant()));
        assert_eq!(line.text, "2025-09-29T22:22:37.272569Z Built payload");
    }
}
