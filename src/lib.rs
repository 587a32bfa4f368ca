/*!

# regress-tag - readable, composable EcmaScript regular expressions

This crate lets you write a regular expression as multi-line, commented text, splice previously built expressions into it, and compile the result with [regress](https://docs.rs/regress).

# Example: a commented, multi-line pattern

Each line is stripped of its comment (everything from the last `##`), trimmed, and joined to the next with nothing in between:

```rust
use regress_tag::regex;
let date = regex!(r"
    (?<year>[0-9]{4})     ## year
    -
    (?<month>[0-9]{2})    ## month
    -
    (?<day>[0-9]{2})      ## day
").unwrap();
assert_eq!(date.pattern(), "(?<year>[0-9]{4})-(?<month>[0-9]{2})-(?<day>[0-9]{2})");

let caps = date.captures("2019-01-12").unwrap();
assert_eq!(caps.name("year"), Some("2019"));
assert_eq!(caps.name("month"), Some("01"));
assert_eq!(caps.name("day"), Some("12"));
```

# Example: composition and flags

A Matcher may be spliced into another pattern with `{...}`. Only its source is inlined; its flags are not. Flags for the new pattern are given to `regex_with!`:

```rust
use regress_tag::{regex, regex_with};
let title = regex!(r"(?<title>mr|mrs|dr|ms)").unwrap();
let suffix = regex!(r"(?<suffix>jr|sr)").unwrap();
let full_name = regex_with!("i"; r"
    ^
    " {&title} r"?
    \.?
    [ ]?
    (?<firstName>[a-zA-Z]+)
    [ ]
    (?<lastName>[a-zA-Z]+)
    [ ]?
    " {&suffix} r"?
    \.?
    $
").unwrap();

let caps = full_name.captures("Mr. Cody Landry Sr").unwrap();
assert_eq!(caps.name("title"), Some("Mr"));
assert_eq!(caps.name("firstName"), Some("Cody"));
assert_eq!(caps.name("lastName"), Some("Landry"));
assert_eq!(caps.name("suffix"), Some("Sr"));
```

# Example: without macros

The same pipeline is available as plain functions over segments and fragments:

```rust
use regress_tag::{compose, Composer, Config, Fragment};
let digits = compose(&[r"\d+"], &[] as &[Fragment]).unwrap();
let re = Composer::with_config(Config::new().comment_delimiter("//"))
    .compose(&["^", "  // digits\n(px|em)$"], &[&digits])
    .unwrap();
assert_eq!(re.pattern(), r"^\d+(px|em)$");
assert!(re.is_match("12px"));
```

# Configuration

- `flags` are forwarded verbatim to regress (`i`, `m`, `s`, `u`, `v`).
- `line_breaks` controls line collapsing. When disabled, the composed text is compiled exactly as written, comments and whitespace included.
- `comment_delimiter` is the substring which starts a comment, `##` by default. The *last* occurrence on a line is the one that counts, so a pattern may contain the delimiter as long as a comment follows it on the same line.

# Errors

The crate never validates the pattern itself. Any syntax error is reported by regress, and its [`Error`] is returned unchanged.

*/

#![warn(clippy::all)]

pub use crate::composer::{compose, Composer};
pub use crate::config::{Config, PartialConfig, DEFAULT_COMMENT_DELIMITER};
pub use crate::fragment::{extract_source, Fragment};
pub use crate::matcher::{Captures, Matcher};
pub use crate::normalize::{collapse_lines, strip_line_comment};
pub use crate::template::{compose_raw, Template};

/// Represents an error encountered while compiling a composed pattern.
/// This is the regex engine's own error type.
pub use regress::Error;

mod composer;
mod config;
mod fragment;
mod matcher;
mod normalize;
mod template;
