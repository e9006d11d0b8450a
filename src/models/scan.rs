use chrono::{Local, NaiveDateTime};

use super::symbology::{Symbology, symbology_label};
use crate::classify::{PayloadKind, classify, display_value};
use crate::utils::timestamp::render_timestamp;

/// A single decoded scan, as handed over by the decode engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Raw decoded text
    pub value: String,
    /// Symbology token as reported by the engine (kept verbatim, even if unknown)
    pub format: String,
    /// When the scan happened, if known
    pub timestamp: Option<NaiveDateTime>,
}

impl ScanResult {
    /// Create a scan result without a timestamp
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
            timestamp: None,
        }
    }

    /// Create a scan result stamped with the current local time
    pub fn scanned_now(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self::new(value, format).with_timestamp(Local::now().naive_local())
    }

    /// Attach a timestamp
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Payload kind of the decoded value
    pub fn kind(&self) -> PayloadKind {
        classify(&self.value)
    }

    /// Whether the decoded value is a navigable link
    pub fn is_link(&self) -> bool {
        self.kind().is_link()
    }

    /// Display-ready decoded value
    pub fn display_value(&self) -> String {
        display_value(&self.value)
    }

    /// Parsed symbology, `None` for unknown tokens
    pub fn symbology(&self) -> Option<Symbology> {
        Symbology::from_token(&self.format)
    }

    /// Symbology label, `""` for unknown tokens
    pub fn format_label(&self) -> &'static str {
        symbology_label(&self.format)
    }

    /// Display form of the timestamp, `""` when there is none
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .as_ref()
            .map(render_timestamp)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_TIMESTAMP_FORMAT, timestamp_format};
    use chrono::NaiveDate;

    #[test]
    fn test_link_result() {
        let scan = ScanResult::new("https://example.com\nmore", "QR_CODE");
        assert!(scan.is_link());
        assert_eq!(scan.kind(), PayloadKind::Link);
        assert_eq!(scan.display_value(), "https://example.com\nmore");
        assert_eq!(scan.format_label(), "QR Code");
        assert_eq!(scan.symbology(), Some(Symbology::QrCode));
    }

    #[test]
    fn test_unknown_format_kept() {
        let scan = ScanResult::new("hello\nworld", "DOTCODE");
        assert_eq!(scan.format, "DOTCODE");
        assert_eq!(scan.format_label(), "");
        assert_eq!(scan.symbology(), None);
        assert_eq!(scan.display_value(), "hello world");
    }

    #[test]
    fn test_contact_result() {
        let scan = ScanResult::new("BEGIN:VCARD\nURL:https://example.com\nEND:VCARD", "QR_CODE");
        assert_eq!(scan.kind(), PayloadKind::Contact);
        assert!(!scan.is_link());
    }

    #[test]
    fn test_timestamp() {
        let scan = ScanResult::new("4006381333931", "EAN_13");
        assert_eq!(scan.formatted_timestamp(), "");

        let ts = NaiveDate::from_ymd_opt(2018, 5, 1)
            .and_then(|d| d.and_hms_opt(7, 8, 9))
            .expect("valid test date");
        let scan = scan.with_timestamp(ts);
        if timestamp_format() == DEFAULT_TIMESTAMP_FORMAT {
            assert_eq!(scan.formatted_timestamp(), "01.05.2018  07:08:09");
        }
        assert_eq!(scan.format_label(), "EAN-13");
    }

    #[test]
    fn test_scanned_now_has_timestamp() {
        let scan = ScanResult::scanned_now("x", "CODE_128");
        assert!(scan.timestamp.is_some());
        assert!(!scan.formatted_timestamp().is_empty());
    }
}
