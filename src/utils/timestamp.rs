//! History timestamp parsing and display formatting.
//!
//! Scan history stores timestamps as ISO-8601 strings. For display they are
//! rendered as `dd.MM.yyyy  hh:mm:ss` (two spaces between date and time)
//! unless `SCAN_RESULT_TIMESTAMP_FORMAT` overrides the format.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;

use crate::config::{DEFAULT_TIMESTAMP_FORMAT, timestamp_format};
use crate::error::{Error, Result};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 date-time or date.
///
/// Offsets are accepted and dropped: the wall-clock time written in the
/// string is what gets returned. A bare date maps to midnight.
pub fn parse_timestamp(iso: &str) -> Result<NaiveDateTime> {
    let s = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }

    Err(Error::InvalidTimestamp(iso.to_string()))
}

/// Render a parsed timestamp with the configured display format.
///
/// Falls back to the built-in format if the configured one is not a valid
/// `chrono` format string.
pub fn render_timestamp(dt: &NaiveDateTime) -> String {
    let mut out = String::new();
    if write!(out, "{}", dt.format(timestamp_format())).is_ok() {
        return out;
    }
    tracing::warn!(
        format = timestamp_format(),
        "invalid timestamp format, using default"
    );
    dt.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}

/// Display form of an ISO-8601 timestamp, or `""` if it does not parse
pub fn format_timestamp(iso: &str) -> String {
    match parse_timestamp(iso) {
        Ok(dt) => render_timestamp(&dt),
        Err(err) => {
            tracing::debug!(%err, "unparseable history timestamp");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid test date")
    }

    #[test]
    fn test_parse_naive() {
        assert_eq!(
            parse_timestamp("2018-05-01T12:34:56").unwrap(),
            ymd_hms(2018, 5, 1, 12, 34, 56)
        );
        assert_eq!(
            parse_timestamp("2018-05-01T12:34:56.789").unwrap().date(),
            ymd_hms(2018, 5, 1, 0, 0, 0).date()
        );
        assert_eq!(
            parse_timestamp("2018-05-01T12:34").unwrap(),
            ymd_hms(2018, 5, 1, 12, 34, 0)
        );
    }

    #[test]
    fn test_parse_with_offset_keeps_wall_clock() {
        assert_eq!(
            parse_timestamp("2018-05-01T12:34:56Z").unwrap(),
            ymd_hms(2018, 5, 1, 12, 34, 56)
        );
        assert_eq!(
            parse_timestamp("2018-05-01T12:34:56+03:00").unwrap(),
            ymd_hms(2018, 5, 1, 12, 34, 56)
        );
        assert_eq!(
            parse_timestamp("2018-05-01T12:34:56-0500").unwrap(),
            ymd_hms(2018, 5, 1, 12, 34, 56)
        );
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            parse_timestamp("2020-02-29").unwrap(),
            ymd_hms(2020, 2, 29, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(Error::InvalidTimestamp("yesterday".to_string()))
        );
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2018-13-01T00:00:00").is_err());
    }

    #[test]
    fn test_format_timestamp_default() {
        // Only meaningful when the format has not been overridden
        if timestamp_format() != DEFAULT_TIMESTAMP_FORMAT {
            return;
        }
        assert_eq!(format_timestamp("2018-05-01T07:08:09"), "01.05.2018  07:08:09");
        assert_eq!(format_timestamp("2020-02-29"), "29.02.2020  00:00:00");
    }

    #[test]
    fn test_format_timestamp_invalid_is_empty() {
        assert_eq!(format_timestamp("not a date"), "");
        assert_eq!(format_timestamp(""), "");
    }
}
