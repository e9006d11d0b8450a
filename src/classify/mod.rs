/// Display normalization
pub mod display;
/// Link, contact and text detection
pub mod link;

pub use display::{display_value, remove_line_breaks};
pub use link::{PayloadKind, classify, is_link, is_text};
