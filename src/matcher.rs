//! Compiled patterns and their captures.

use regress::{Match, Matches, Range, Regex};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::composer::Composer;
use crate::template::Template;
use crate::Error;

/// A Matcher is a compiled, composed pattern together with the flags it was
/// compiled with.
#[derive(Debug, Clone)]
pub struct Matcher {
    re: Regex,
    pattern: String,
    flags: String,
}

impl Matcher {
    pub(crate) fn new(re: Regex, pattern: String, flags: String) -> Self {
        Self { re, pattern, flags }
    }

    /// The pattern string exactly as it was handed to the regex engine.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern source, rendered the way EcmaScript renders
    /// `RegExp.prototype.source`: an empty pattern becomes `(?:)`, and
    /// forward slashes and line terminators are escaped so the source may
    /// sit between `/` delimiters. This is the text inlined when the Matcher
    /// is used as a fragment of another composition.
    #[inline]
    pub fn source(&self) -> Cow<'_, str> {
        escape_source(&self.pattern)
    }

    /// The flags, verbatim as configured.
    #[inline]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Access the underlying regex.
    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.re
    }

    /// Consume the Matcher, returning the underlying regex.
    #[inline]
    pub fn into_regex(self) -> Regex {
        self.re
    }

    /// \return whether the pattern matches anywhere in `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.re.find(text).is_some()
    }

    /// Searches `text` to find the first match.
    #[inline]
    pub fn find(&self, text: &str) -> Option<Match> {
        self.re.find(text)
    }

    /// Searches `text`, returning an iterator over non-overlapping matches.
    #[inline]
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.re.find_iter(text)
    }

    /// Searches `text` for the first match, returning its capture groups.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let m = self.re.find(text)?;
        Some(Captures { text, m })
    }
}

impl fmt::Display for Matcher {
    /// Render as a delimited literal, `/source/flags`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags)
    }
}

impl FromStr for Matcher {
    type Err = Error;

    /// Compose `s` as a single literal segment, using the default config.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Composer::default().compile(&Template::new().literal(s))
    }
}

/// The capture groups of a single match, borrowing the searched text.
#[derive(Debug, Clone)]
pub struct Captures<'t> {
    text: &'t str,
    m: Match,
}

impl<'t> Captures<'t> {
    /// Access a group by index. Index 0 is the total match, index 1 is the
    /// first capture group. Returns None for groups which did not
    /// participate, or which do not exist.
    pub fn get(&self, idx: usize) -> Option<&'t str> {
        if idx >= self.len() {
            return None;
        }
        let text = self.text;
        self.m.group(idx).map(|r| &text[r])
    }

    /// Access a named group by name.
    pub fn name(&self, name: &str) -> Option<&'t str> {
        let text = self.text;
        self.m.named_group(name).map(|r| &text[r])
    }

    /// Iterate over the named groups, in pattern order.
    pub fn named(&self) -> impl Iterator<Item = (&str, Option<&'t str>)> + '_ {
        let text = self.text;
        self.m
            .named_groups()
            .map(move |(name, r)| (name, r.map(|r| &text[r])))
    }

    /// The number of groups, including the total match.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.captures.len() + 1
    }

    /// Always false: the total match is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The range of the total match.
    #[inline]
    pub fn range(&self) -> Range {
        self.m.range()
    }

    /// Access the underlying Match.
    #[inline]
    pub fn as_match(&self) -> &Match {
        &self.m
    }
}

const SOURCE_ESCAPES: &[char] = &['/', '\n', '\r', '\u{2028}', '\u{2029}'];

/// Render `pattern` as an EcmaScript regex source.
fn escape_source(pattern: &str) -> Cow<'_, str> {
    if pattern.is_empty() {
        return Cow::Borrowed("(?:)");
    }
    if !pattern.contains(SOURCE_ESCAPES) {
        return Cow::Borrowed(pattern);
    }
    let mut result = String::with_capacity(pattern.len() + 8);
    // Whether the previous character was an unescaped backslash.
    let mut escaped = false;
    // Slashes inside a bracket do not terminate a literal and are left alone.
    let mut in_bracket = false;
    for c in pattern.chars() {
        let line_escape = match c {
            '\n' => Some("n"),
            '\r' => Some("r"),
            '\u{2028}' => Some("u2028"),
            '\u{2029}' => Some("u2029"),
            _ => None,
        };
        if let Some(esc) = line_escape {
            if !escaped {
                result.push('\\');
            }
            result.push_str(esc);
            escaped = false;
            continue;
        }
        if escaped {
            result.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            '/' if !in_bracket => result.push('\\'),
            _ => {}
        }
        result.push(c);
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::escape_source;

    #[test]
    fn source_rendering() {
        assert_eq!(escape_source(""), "(?:)");
        assert_eq!(escape_source("abc"), "abc");
        assert_eq!(escape_source("a/b"), r"a\/b");
        assert_eq!(escape_source(r"a\/b"), r"a\/b");
        assert_eq!(escape_source("[/]/"), r"[/]\/");
        assert_eq!(escape_source(r"[\]/]/"), r"[\]/]\/");
        assert_eq!(escape_source("a\nb\r"), r"a\nb\r");
        assert_eq!(escape_source("a\u{2028}"), r"a\u2028");
    }
}
