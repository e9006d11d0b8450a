use super::link::is_link;

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Replace every line break character with a single space.
///
/// `"\r\n"` becomes two spaces; every other character passes through.
pub fn remove_line_breaks(text: &str) -> String {
    text.chars()
        .map(|c| if is_line_break(c) { ' ' } else { c })
        .collect()
}

/// Display-ready form of a decoded value.
///
/// Links are returned verbatim, line breaks included. Everything else has
/// its line breaks collapsed to spaces.
pub fn display_value(text: &str) -> String {
    if is_link(text) {
        text.to_string()
    } else {
        remove_line_breaks(text)
    }
}
