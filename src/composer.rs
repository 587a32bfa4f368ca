//! Compilation of templates into Matchers.

use regress::Regex;
use std::borrow::Cow;
use tracing::{debug, trace};

use crate::config::{Config, PartialConfig};
use crate::fragment::Fragment;
use crate::matcher::Matcher;
use crate::normalize;
use crate::template::{self, Template};
use crate::Error;

/// A Composer turns templates into Matchers under a fixed Config.
/// `Composer::default()` uses the default config; `Composer::new` overlays a
/// partial config on the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    config: Config,
}

impl Composer {
    /// Construct a Composer by resolving `partial` against the defaults.
    #[inline]
    pub fn new(partial: PartialConfig) -> Self {
        Self::with_config(Config::resolve(partial))
    }

    /// Construct a Composer with a complete config.
    #[inline]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Access the config.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize a composed raw string. If line breaks are enabled, comments
    /// are stripped and lines collapsed; otherwise `raw` is returned as-is.
    pub fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.config.line_breaks {
            Cow::Owned(normalize::collapse_lines(
                raw,
                &self.config.comment_delimiter,
            ))
        } else {
            Cow::Borrowed(raw)
        }
    }

    /// \return the pattern string that `compile` would hand to the regex
    /// engine for `template`.
    pub fn pattern(&self, template: &Template) -> String {
        self.normalize(&template.compose_raw()).into_owned()
    }

    /// Compose and compile a template.
    /// An Error is returned if the resulting pattern or the flags are
    /// rejected by the regex engine; it is passed through unchanged.
    pub fn compile(&self, template: &Template) -> Result<Matcher, Error> {
        self.finish(template.compose_raw())
    }

    /// Compose and compile `segments` interleaved with `parts`.
    pub fn compose<S, F>(&self, segments: &[S], parts: &[F]) -> Result<Matcher, Error>
    where
        S: AsRef<str>,
        F: Into<Fragment> + Clone,
    {
        let fragments: Vec<Fragment> = parts.iter().cloned().map(Into::into).collect();
        self.finish(template::compose_raw(segments, &fragments))
    }

    fn finish(&self, raw: String) -> Result<Matcher, Error> {
        trace!(raw = %raw, "composed template");
        let pattern = self.normalize(&raw).into_owned();
        let flags = &self.config.flags;
        trace!(pattern = %pattern, flags = %flags, "compiling pattern");
        match Regex::with_flags(&pattern, flags.as_str()) {
            Ok(re) => Ok(Matcher::new(re, pattern, flags.clone())),
            Err(err) => {
                debug!(
                    error = %err,
                    pattern = %pattern,
                    flags = %flags,
                    "pattern failed to compile"
                );
                Err(err)
            }
        }
    }
}

impl From<Config> for Composer {
    #[inline]
    fn from(config: Config) -> Self {
        Self::with_config(config)
    }
}

impl From<PartialConfig> for Composer {
    #[inline]
    fn from(partial: PartialConfig) -> Self {
        Self::new(partial)
    }
}

impl From<&Composer> for Composer {
    #[inline]
    fn from(composer: &Composer) -> Self {
        composer.clone()
    }
}

impl From<&str> for Composer {
    /// Construct a Composer with the given flags and otherwise default
    /// options.
    #[inline]
    fn from(flags: &str) -> Self {
        Self::with_config(Config::from(flags))
    }
}

/// Compose and compile `segments` interleaved with `parts`, using the
/// default config.
#[inline]
pub fn compose<S, F>(segments: &[S], parts: &[F]) -> Result<Matcher, Error>
where
    S: AsRef<str>,
    F: Into<Fragment> + Clone,
{
    Composer::default().compose(segments, parts)
}

/// Compose and compile a pattern with the default config.
///
/// String literals are literal segments; `{expr}` blocks are dynamic parts,
/// anything convertible into a [`Fragment`](crate::Fragment). Commas between
/// pieces are optional.
///
/// ```rust
/// use regress_tag::regex;
/// let word = regex!(r"\w+").unwrap();
/// let pair = regex!(
///     r"
///     ^(?<key>" {&word} r")    ## key
///     =                        ## separator
///     (?<value>\d+)$           ## value
///     "
/// )
/// .unwrap();
/// assert_eq!(pair.pattern(), r"^(?<key>\w+)=(?<value>\d+)$");
/// let caps = pair.captures("width=80").unwrap();
/// assert_eq!(caps.name("key"), Some("width"));
/// assert_eq!(caps.name("value"), Some("80"));
/// ```
#[macro_export]
macro_rules! regex {
    ($($body:tt)*) => {
        $crate::regex_with!($crate::Composer::default(); $($body)*)
    };
}

/// Compose and compile a pattern with a given config.
///
/// The first argument is anything convertible into a
/// [`Composer`](crate::Composer): a `Composer`, a `Config`, a
/// `PartialConfig`, or a string of flags.
///
/// ```rust
/// use regress_tag::regex_with;
/// let re = regex_with!("i"; "ABC").unwrap();
/// assert_eq!(re.flags(), "i");
/// assert!(re.is_match("xabcx"));
/// ```
#[macro_export]
macro_rules! regex_with {
    ($composer:expr; $($body:tt)*) => {{
        let mut template = $crate::Template::new();
        $crate::__push_template!(template; $($body)*);
        $crate::Composer::from($composer).compile(&template)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __push_template {
    ($template:ident;) => {};
    ($template:ident; , $($rest:tt)*) => {
        $crate::__push_template!($template; $($rest)*);
    };
    ($template:ident; { $part:expr } $($rest:tt)*) => {
        $template.push_part($part);
        $crate::__push_template!($template; $($rest)*);
    };
    ($template:ident; $lit:literal $($rest:tt)*) => {
        $template.push_literal($lit);
        $crate::__push_template!($template; $($rest)*);
    };
}
