use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use crate::models::Symbology;

/// Undo the line-oriented escaping used by `scantool render` input files.
///
/// Recognizes `\n`, `\r`, `\t` and `\\`. Any other backslash sequence is
/// kept as written.
pub fn unescape_value(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Read one escaped value per line from `path`, or from stdin when `None`.
pub fn read_values(path: Option<&Path>) -> io::Result<Vec<String>> {
    let lines: Vec<String> = match path {
        Some(path) => fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };
    Ok(lines.iter().map(|l| unescape_value(l)).collect())
}

/// `(token, label)` pairs for every known symbology
pub fn format_table() -> Vec<(&'static str, &'static str)> {
    Symbology::ALL
        .iter()
        .map(|s| (s.token(), s.label()))
        .collect()
}
