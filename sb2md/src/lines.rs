//! Line splitting

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern"));

/// Splits text on `\r\n`, `\r` or `\n`, dropping the terminators.
///
/// Always yields at least one line: empty text is a single empty line, and a trailing
/// terminator produces a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}
