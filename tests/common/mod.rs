#![allow(clippy::uninlined_format_args)]

use regress_tag::{Composer, Config, Matcher};

/// Test that composing \p text with \p flags fails to compile.
#[track_caller]
pub fn test_compose_fails(text: &str, flags: &str) -> regress_tag::Error {
    let res = Composer::from(flags).compose(&[text], &[] as &[&str]);
    assert!(res.is_err(), "Pattern should not have compiled: {}", text);
    res.err().unwrap()
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}

pub trait VecTestHelpers {
    /// "Fluent" style helper for testing that a Vec<&str> is equal to a
    /// Vec<&str>.
    fn test_eq(&self, rhs: Vec<&str>);
}

impl VecTestHelpers for Vec<&str> {
    fn test_eq(&self, rhs: Vec<&str>) {
        assert_eq!(*self, rhs)
    }
}

/// A composed matcher which remembers a TestConfig.
#[derive(Debug, Clone)]
pub struct TestMatcher {
    m: Matcher,
    #[allow(dead_code)]
    tc: TestConfig,
}

impl TestMatcher {
    /// The pattern handed to the regex engine.
    pub fn pattern(&self) -> String {
        self.m.pattern().to_string()
    }

    /// The matcher itself.
    pub fn matcher(&self) -> &Matcher {
        &self.m
    }

    /// Match against a string, returning the total match.
    #[track_caller]
    pub fn match1f(&self, input: &str) -> String {
        match self.m.captures(input) {
            Some(caps) => caps.get(0).unwrap_or_default().to_string(),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Match against a string, returning the string of the named capture
    /// group given.
    #[track_caller]
    pub fn match1_named_group(&self, input: &str, group: &str) -> String {
        match self.m.captures(input) {
            Some(caps) => match caps.name(group) {
                Some(s) => s.to_string(),
                None => panic!("Named capture group does not exist {}", group),
            },
            None => panic!("Failed to match {}", input),
        }
    }

    /// Return a list of all non-overlapping matches.
    pub fn match_all<'b>(&self, input: &'b str) -> Vec<&'b str> {
        self.m
            .find_iter(input)
            .map(move |m| &input[m.range()])
            .collect()
    }

    /// Test that matching against \p input fails.
    #[track_caller]
    pub fn test_fails(&self, input: &str) {
        assert!(!self.m.is_match(input), "Should not have matched")
    }

    /// Test that matching against \p input succeeds.
    #[track_caller]
    pub fn test_succeeds(&self, input: &str) {
        assert!(self.m.is_match(input), "Should have matched")
    }
}

/// Description of how to compose a pattern.
/// Test text is always written with `##` comments; each config substitutes
/// its own delimiter.
#[derive(Debug, Copy, Clone)]
pub struct TestConfig {
    delimiter: &'static str,
}

impl TestConfig {
    /// Rewrite `##` in \p text to this config's delimiter.
    pub fn comment(&self, text: &str) -> String {
        text.replace("##", self.delimiter)
    }

    /// A composer using this config's delimiter and \p flags.
    pub fn composer(&self, flags: &str) -> Composer {
        Composer::with_config(Config::new().flags(flags).comment_delimiter(self.delimiter))
    }

    /// Compose \p text as a single segment, with default flags.
    pub fn compile(&self, text: &str) -> TestMatcher {
        self.compilef(text, "")
    }

    /// Compose \p text as a single segment, with given flags.
    #[track_caller]
    pub fn compilef(&self, text: &str, flags: &str) -> TestMatcher {
        self.compose(&[text], &[], flags)
    }

    /// Compose \p segments around \p parts, with given flags.
    #[track_caller]
    pub fn compose(&self, segments: &[&str], parts: &[&Matcher], flags: &str) -> TestMatcher {
        let segments: Vec<String> = segments.iter().map(|s| self.comment(s)).collect();
        let res = self.composer(flags).compose(&segments, parts);
        assert!(
            res.is_ok(),
            "Failed to compile! delimiter: {} flags: {} segments: {:?}, error: {}",
            self.delimiter,
            flags,
            segments,
            res.unwrap_err()
        );
        TestMatcher {
            m: res.unwrap(),
            tc: *self,
        }
    }
}

/// Invoke \p F with each test config, in turn.
pub fn test_with_delimiters<F>(func: F)
where
    F: Fn(TestConfig),
{
    for delimiter in ["##", "//", "--", ";;", "\u{00A7}\u{00A7}"] {
        func(TestConfig { delimiter });
    }
}
