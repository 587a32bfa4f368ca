//! Interleaving of literal segments with dynamic fragments.

use crate::fragment::Fragment;

/// Interleave `segments` with `fragments`, emitting segment 0, fragment 0,
/// segment 1, and so on, ending with the last segment.
/// Surplus fragments are ignored and missing fragments contribute nothing.
/// Segments are copied byte for byte; no escapes are interpreted.
pub fn compose_raw<S: AsRef<str>>(segments: &[S], fragments: &[Fragment]) -> String {
    let len = segments.iter().map(|s| s.as_ref().len()).sum::<usize>()
        + fragments.iter().map(|f| f.inline().len()).sum::<usize>();
    let mut result = String::with_capacity(len);
    let last = segments.len().saturating_sub(1);
    for (idx, segment) in segments.iter().enumerate() {
        result.push_str(segment.as_ref());
        if idx < last {
            if let Some(fragment) = fragments.get(idx) {
                result.push_str(fragment.inline());
            }
        }
    }
    result
}

/// A Template is an ordered sequence of literal segments with a fragment
/// between each adjacent pair. There is always exactly one more segment than
/// there are fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<String>,
    fragments: Vec<Fragment>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// Construct an empty template, consisting of a single empty segment.
    pub fn new() -> Self {
        Self {
            segments: vec![String::new()],
            fragments: Vec::new(),
        }
    }

    /// Construct a template from caller-supplied segments and fragments.
    /// If the counts disagree, the template is padded or truncated exactly
    /// as `compose_raw` would treat them: surplus fragments are dropped and
    /// missing fragments become empty text.
    pub fn from_parts<S, F>(segments: &[S], fragments: &[F]) -> Self
    where
        S: AsRef<str>,
        F: Into<Fragment> + Clone,
    {
        let mut result = Self {
            segments: Vec::with_capacity(segments.len().max(1)),
            fragments: Vec::with_capacity(segments.len().saturating_sub(1)),
        };
        for (idx, segment) in segments.iter().enumerate() {
            if idx > 0 {
                let fragment = match fragments.get(idx - 1) {
                    Some(f) => f.clone().into(),
                    None => Fragment::Text(String::new()),
                };
                result.fragments.push(fragment);
            }
            result.segments.push(segment.as_ref().to_string());
        }
        if result.segments.is_empty() {
            result.segments.push(String::new());
        }
        result
    }

    /// Append literal text to the current segment.
    pub fn push_literal(&mut self, text: &str) -> &mut Self {
        if let Some(segment) = self.segments.last_mut() {
            segment.push_str(text);
        }
        self
    }

    /// Append a dynamic part, starting a new segment after it.
    pub fn push_part<F: Into<Fragment>>(&mut self, fragment: F) -> &mut Self {
        self.fragments.push(fragment.into());
        self.segments.push(String::new());
        self
    }

    /// Builder form of `push_literal`.
    #[inline]
    pub fn literal(mut self, text: &str) -> Self {
        self.push_literal(text);
        self
    }

    /// Builder form of `push_part`.
    #[inline]
    pub fn part<F: Into<Fragment>>(mut self, fragment: F) -> Self {
        self.push_part(fragment);
        self
    }

    /// The literal segments.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dynamic fragments.
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Interleave the segments and fragments into one raw string.
    #[inline]
    pub fn compose_raw(&self) -> String {
        compose_raw(&self.segments, &self.fragments)
    }
}
