// ABOUTME: Text normalization helpers shared by the extractors.
// ABOUTME: Collapses whitespace runs into single spaces and trims the result.

use once_cell::sync::Lazy;
use regex::Regex;

const WHITESPACE: &[char] = &['\n', '\r', ' ', '\t'];

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r \t]+").unwrap());

/// Collapses every run of newline, carriage-return, space or tab characters
/// into a single space, then trims the result. Other Unicode spaces, such
/// as U+00A0, are kept.
pub fn text_normalise(text: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(text, " ")
        .trim_matches(WHITESPACE)
        .to_string()
}
