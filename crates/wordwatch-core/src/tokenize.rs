//! Word tokenization.
//!
//! Every counting and coverage operation in the pipeline runs on the
//! tokens produced here, so the rules are deliberately minimal: a token
//! is a maximal run of letters, digits, and apostrophes, lower-cased.
//! Whitespace-only differences between format extractors never change
//! the token stream.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for word tokens: maximal runs of letters, digits, apostrophes.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9']+").expect("valid regex"));

/// Split text into normalized word tokens, in order of appearance.
///
/// Pure and infallible; empty runs are excluded by construction.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}

/// Count the tokens in a text fragment without collecting them.
pub fn count_tokens(text: &str) -> usize {
    TOKEN_PATTERN.find_iter(text).count()
}
