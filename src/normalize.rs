//! Collapsing of multi-line, commented pattern text into a single line.

use memchr::memmem;

/// \return `line` with everything from the last occurrence of `delimiter`
/// removed. If the delimiter does not appear, or is empty, the line is
/// returned unchanged.
///
/// Note the *last* occurrence is used, so a pattern may contain the
/// delimiter earlier in the line as long as a comment follows it.
pub fn strip_line_comment<'a>(line: &'a str, delimiter: &str) -> &'a str {
    if delimiter.is_empty() {
        return line;
    }
    match memmem::rfind(line.as_bytes(), delimiter.as_bytes()) {
        // The delimiter is valid UTF-8, so a match always begins on a char
        // boundary.
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// \return whether `c` is EcmaScript whitespace or a line terminator.
/// This is Unicode whitespace plus the byte order mark, minus NEL.
#[inline]
fn is_es_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Trim leading and trailing whitespace, using the EcmaScript notion of
/// whitespace.
#[inline]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_es_whitespace)
}

/// Collapse `text` into a single pattern string.
/// Each line has its comment stripped and is then trimmed; lines left empty
/// are dropped and the rest are joined with no separator.
pub fn collapse_lines(text: &str, delimiter: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for line in text.split('\n') {
        let line = trim_line(strip_line_comment(line, delimiter));
        result.push_str(line);
    }
    result
}
