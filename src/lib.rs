//! scan_result - interpretation of decoded barcode and QR scan results
//!
//! Takes the text recovered by a barcode decoder and decides how to present
//! it: whether it is a navigable link, what it looks like on a single line,
//! and which human-readable label belongs to the symbology it came from.
//! Decoding itself, capture and persistence live elsewhere.
//!
//! # Example
//! ```
//! use scan_result::{display_value, is_link, symbology_label};
//!
//! assert!(is_link("https://example.com"));
//! assert_eq!(display_value("hello\nworld"), "hello world");
//! assert_eq!(symbology_label("QR_CODE"), "QR Code");
//! assert_eq!(symbology_label("UNKNOWN_FUTURE_CODE"), "");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Link/text classification and display normalization
pub mod classify;
/// Environment-driven tunables
pub mod config;
/// Error type for the strict parsing entry points
pub mod error;
/// Value types (ScanResult, Symbology)
pub mod models;
/// Command-line helpers used by `scantool`
pub mod tools;
/// Batch rendering and history timestamps
pub mod utils;

pub use classify::{PayloadKind, classify, display_value, is_link, is_text, remove_line_breaks};
pub use error::{Error, Result};
pub use models::{ScanResult, Symbology, symbology_label};
pub use utils::batch::{classify_all, render_display_values};
pub use utils::timestamp::{format_timestamp, parse_timestamp};
