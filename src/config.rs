//! Composition options and their defaults.

/// The comment delimiter used when none is configured.
pub const DEFAULT_COMMENT_DELIMITER: &str = "##";

/// Options which control how a template is turned into a pattern.
/// The default config has no flags, strips comments and line breaks, and uses
/// `##` as the comment delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Flags forwarded verbatim to the regex engine, for example "i" or "mu".
    pub flags: String,

    /// If set, the composed text is collapsed line by line: comments are
    /// removed, each line is trimmed and blank lines are dropped.
    /// If not set, the composed text is compiled exactly as written.
    pub line_breaks: bool,

    /// The substring which starts an inline comment.
    pub comment_delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flags: String::new(),
            line_breaks: true,
            comment_delimiter: DEFAULT_COMMENT_DELIMITER.to_string(),
        }
    }
}

impl Config {
    /// Construct the default config.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay the fields present in `partial` on top of the defaults.
    /// No field is validated.
    pub fn resolve(partial: PartialConfig) -> Self {
        let mut config = Self::default();
        if let Some(flags) = partial.flags {
            config.flags = flags;
        }
        if let Some(line_breaks) = partial.line_breaks {
            config.line_breaks = line_breaks;
        }
        if let Some(comment_delimiter) = partial.comment_delimiter {
            config.comment_delimiter = comment_delimiter;
        }
        config
    }

    /// Set the flags.
    #[inline]
    pub fn flags<S: Into<String>>(mut self, flags: S) -> Self {
        self.flags = flags.into();
        self
    }

    /// Enable or disable line collapsing.
    #[inline]
    pub fn line_breaks(mut self, line_breaks: bool) -> Self {
        self.line_breaks = line_breaks;
        self
    }

    /// Set the comment delimiter.
    #[inline]
    pub fn comment_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.comment_delimiter = delimiter.into();
        self
    }
}

impl From<PartialConfig> for Config {
    #[inline]
    fn from(partial: PartialConfig) -> Self {
        Self::resolve(partial)
    }
}

impl From<&str> for Config {
    /// Construct a Config with the given flags and otherwise default options.
    #[inline]
    fn from(flags: &str) -> Self {
        Self::default().flags(flags)
    }
}

/// A config where every field is optional.
/// Missing fields take their default values when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub flags: Option<String>,
    pub line_breaks: Option<bool>,
    pub comment_delimiter: Option<String>,
}
