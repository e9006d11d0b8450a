//! Link detection for decoded payloads.
//!
//! A payload is a link when the whole string is an `http(s)://`, `www.` or
//! `sms:` reference. A vCard marker anywhere inside the payload overrides
//! that: contact cards routinely carry a homepage URL and must go to the
//! contact import path instead of the browser.

use regex::Regex;
use std::sync::OnceLock;

/// Whole-string link pattern. `(?s)` lets `.` cross embedded line breaks.
const LINK_PATTERN: &str = r"(?s)\A(?:https?://.{3,}|www\..{3,}|sms:.*)\z";

/// `VCARD` with at least one character on each side.
const VCARD_PATTERN: &str = r"(?s)\A.+VCARD.+\z";

/// How a decoded payload should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Navigable URL or SMS reference
    Link,
    /// vCard contact payload
    Contact,
    /// Anything else
    Text,
}

impl PayloadKind {
    /// True only for [`PayloadKind::Link`]
    pub fn is_link(&self) -> bool {
        matches!(self, PayloadKind::Link)
    }

    /// Short lowercase name, used by the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Link => "link",
            PayloadKind::Contact => "contact",
            PayloadKind::Text => "text",
        }
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::error!(pattern, %err, "failed to compile payload pattern");
            None
        }
    }
}

static LINK_RE: OnceLock<Option<Regex>> = OnceLock::new();
static VCARD_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn matches_link(text: &str) -> bool {
    LINK_RE
        .get_or_init(|| compile(LINK_PATTERN))
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

fn matches_vcard(text: &str) -> bool {
    VCARD_RE
        .get_or_init(|| compile(VCARD_PATTERN))
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

/// Classify a decoded payload.
///
/// The vCard check runs first and wins over the link check.
pub fn classify(text: &str) -> PayloadKind {
    let kind = if matches_vcard(text) {
        PayloadKind::Contact
    } else if matches_link(text) {
        PayloadKind::Link
    } else {
        PayloadKind::Text
    };
    tracing::trace!(len = text.len(), kind = kind.as_str(), "classified payload");
    kind
}

/// Whether a decoded payload is a navigable link
pub fn is_link(text: &str) -> bool {
    classify(text).is_link()
}

/// Whether a decoded payload is plain text. Always `!is_link(text)`.
pub fn is_text(text: &str) -> bool {
    !is_link(text)
}
