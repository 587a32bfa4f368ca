#![allow(clippy::uninlined_format_args)]

// Work around dead code warnings: rust-lang issue #46379
pub mod common;

use common::test_compose_fails;
use regress_tag::{regex, regex_with, Composer, Config, Template};

/// Test that composing \p text fails with the same error regress reports for
/// \p pattern.
#[track_caller]
fn test_1_error(text: &str, pattern: &str, expected_err: &str) {
    let err = test_compose_fails(text, "u").text;
    assert!(
        err.contains(expected_err),
        "Error text '{}' did not contain '{}' for text '{}'",
        err,
        expected_err,
        text
    );
    let direct = regress::Regex::with_flags(pattern, "u").err().unwrap().text;
    assert_eq!(err, direct, "Error was not passed through for '{}'", text);
}

#[test]
fn test_syntax_errors() {
    test_1_error("(  ## open", "(", "Unbalanced parenthesis");
    test_1_error("abc\n)", "abc)", "Unbalanced parenthesis");
    test_1_error("[abc  ## class\n", "[abc", "Unbalanced bracket");
    test_1_error("x{5,3}", "x{5,3}", "Invalid quantifier");
    test_1_error("\n*\n", "*", "Invalid atom character");
}

#[test]
fn test_comment_hides_closing_paren() {
    // The closing paren sits inside the comment, so the pattern is left
    // unbalanced.
    let err = regex!("(a ## )").err().unwrap();
    assert!(err.text.contains("Unbalanced parenthesis"), "{}", err);

    // With line breaks disabled the same text compiles.
    let m = regex_with!(Config::new().line_breaks(false); "(a ## )").unwrap();
    assert_eq!(m.pattern(), "(a ## )");
}

#[test]
fn test_bad_fragment_text() {
    // Fragments are inlined without escaping; a stray paren breaks the
    // pattern.
    let composer = Composer::default();
    let template = Template::new().literal("a").part("(").literal("b");
    let err = composer.compile(&template).err().unwrap();
    assert!(err.text.contains("Unbalanced parenthesis"), "{}", err);
}
