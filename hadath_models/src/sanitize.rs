//! Best-effort denylist filter for free-text input.
//!
//! This is not an html sanitizer. It removes angle brackets, the
//! `javascript:` protocol and inline event handler prefixes such as
//! `onclick=`, nothing else. Output must still be escaped wherever it is
//! rendered.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static ANGLE_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[<>]").unwrap());
static JAVASCRIPT_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)javascript:").unwrap());
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+=").unwrap());

/// Trims the input and strips `<`, `>`, `javascript:` and `on<word>=`
/// (case-insensitive).
///
/// Removing a match can join its neighbours into a new match
/// (`"javajavascript:script:"`), so the substitutions are repeated until
/// nothing changes. Every round that changes something makes the string
/// shorter, so this terminates.
pub fn sanitize_input(input: &str) -> String {
    let mut current = sanitize_once(input);
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(input: &str) -> String {
    let value = input.trim();
    let value = ANGLE_BRACKETS.replace_all(value, "");
    let value = replace_all(&JAVASCRIPT_PROTOCOL, value);
    let value = replace_all(&EVENT_HANDLER, value);
    value.into_owned()
}

fn replace_all<'a>(regex: &Regex, value: Cow<'a, str>) -> Cow<'a, str> {
    match value {
        Cow::Borrowed(value) => regex.replace_all(value, ""),
        Cow::Owned(value) => Cow::Owned(regex.replace_all(&value, "").into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn documented_substitutions() {
        for (input, expected) in [
            ("  Ali Hassan  ", "Ali Hassan"),
            ("<script>alert(1)</script>", "scriptalert(1)/script"),
            ("JavaScript:foo", "foo"),
            ("a javascript:b JAVASCRIPT:c", "a b c"),
            ("<img onClick=bar>", "img bar"),
            ("onmouseover=x ONLOAD=y", "x y"),
            ("one = two", "one = two"),
            ("مرحبا بكم", "مرحبا بكم"),
            ("", ""),
        ] {
            assert_eq!(sanitize_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn removals_that_reveal_new_matches() {
        for (input, expected) in [
            ("javajavascript:script:alert", "alert"),
            ("oonclick=nclick=x", "x"),
            ("  <  padded", "padded"),
            ("on<click=x", "x"),
        ] {
            assert_eq!(sanitize_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn idempotent() {
        for input in [
            "plain text",
            "  <b>bold</b>  ",
            "javajavascript:script:",
            "<<>>  onerror=onerror==",
            " > javascript:JAVASCRIPT: <",
            "\u{a0}text\u{a0}",
        ] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_contains_no_denied_substrings() {
        for input in [
            "<script>alert('x')</script>",
            "click javascript:foo now",
            "<a onClick=bar>link</a>",
            "JaVaScRiPt:void(0)",
        ] {
            let output = sanitize_input(input);
            let lower = output.to_lowercase();
            assert!(!output.contains('<'), "{output:?}");
            assert!(!output.contains('>'), "{output:?}");
            assert!(!lower.contains("javascript:"), "{output:?}");
            assert!(!EVENT_HANDLER.is_match(&output), "{output:?}");
        }
    }
}
