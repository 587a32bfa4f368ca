//! Dynamic parts of a composition.

use std::fmt;

use crate::matcher::Matcher;

/// A Fragment is a dynamic value interpolated between literal segments.
/// Text is inlined as-is; a matcher contributes only its pattern source, and
/// its flags are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text, inlined verbatim.
    Text(String),

    /// A previously built pattern.
    Matcher { source: String, flags: String },
}

impl Fragment {
    /// Construct a text fragment from any displayable value, such as a
    /// number.
    #[inline]
    pub fn display<T: fmt::Display>(value: T) -> Self {
        Fragment::Text(value.to_string())
    }

    /// Construct a matcher fragment from a delimited literal such as
    /// `/ab+c/i`. The source is the text between the first character and the
    /// last `/`; the flags are whatever follows the last `/`.
    /// \return None if there is no closing `/`.
    pub fn from_literal(literal: &str) -> Option<Self> {
        let (source, flags) = split_literal(literal)?;
        Some(Fragment::Matcher {
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }

    /// \return the text inlined into a composition.
    #[inline]
    pub fn inline(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Matcher { source, .. } => source,
        }
    }

    /// \return whether this fragment came from a matcher.
    #[inline]
    pub fn is_matcher(&self) -> bool {
        matches!(self, Fragment::Matcher { .. })
    }
}

/// \return the source of a delimited literal, discarding the delimiters and
/// any trailing flags.
#[inline]
pub fn extract_source(literal: &str) -> Option<&str> {
    split_literal(literal).map(|(source, _)| source)
}

fn split_literal(literal: &str) -> Option<(&str, &str)> {
    let mut chars = literal.chars();
    let open = chars.next()?.len_utf8();
    let close = literal.rfind('/')?;
    if close < open {
        return None;
    }
    Some((&literal[open..close], &literal[close + 1..]))
}

impl From<&str> for Fragment {
    #[inline]
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<String> for Fragment {
    #[inline]
    fn from(s: String) -> Self {
        Fragment::Text(s)
    }
}

impl From<&String> for Fragment {
    #[inline]
    fn from(s: &String) -> Self {
        Fragment::Text(s.clone())
    }
}

impl From<char> for Fragment {
    #[inline]
    fn from(c: char) -> Self {
        Fragment::Text(c.to_string())
    }
}

impl From<&Matcher> for Fragment {
    fn from(m: &Matcher) -> Self {
        Fragment::Matcher {
            source: m.source().into_owned(),
            flags: m.flags().to_string(),
        }
    }
}

impl From<Matcher> for Fragment {
    #[inline]
    fn from(m: Matcher) -> Self {
        Fragment::from(&m)
    }
}

impl From<&Fragment> for Fragment {
    #[inline]
    fn from(f: &Fragment) -> Self {
        f.clone()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.inline())
    }
}
