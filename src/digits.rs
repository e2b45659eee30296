//! "Is this string only digits?", answered three ways.
//!
//! All three use the same pattern and give the same answers. They differ in
//! how often the regex gets compiled:
//!
//! - `is_only_digits_naive` compiles it on every call and throws it away
//! - `DigitMatcher` compiles it once and is reused for every candidate
//! - `is_only_digits_static` compiles it once per process, on first use
//!
//! Matching is whole-string: `"12a"` is rejected even though it starts with
//! digits. `\d` is ASCII `0-9` only.

use crate::error::Result;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::debug;

pub const DIGITS_PATTERN: &str = r"\d+";

/// The six candidates the lesson checks.
pub const DEFAULT_INPUTS: [&str; 6] = ["12345", "1212", "3423", "4534", "4567", "5678"];

lazy_static! {
    static ref SHARED_DIGITS: std::result::Result<Regex, regex::Error> =
        compile_full_match(DIGITS_PATTERN);
}

/// Compiles `pattern` so that it only matches a candidate in its entirety.
pub fn compile_full_match(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .unicode(false)
        .build()
}

/// Builds a fresh engine for this one call.
pub fn is_only_digits_naive(candidate: &str) -> Result<bool> {
    let regex = compile_full_match(DIGITS_PATTERN)?;
    Ok(regex.is_match(candidate))
}

pub fn check_naive<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<bool>> {
    inputs
        .iter()
        .map(|s| {
            let candidate: &str = s.as_ref();
            let matched = is_only_digits_naive(candidate)?;
            debug!(candidate, matched, strategy = "naive", "digit check");
            Ok(matched)
        })
        .collect()
}

/// Uses the process-wide engine, compiled on first use.
pub fn is_only_digits_static(candidate: &str) -> Result<bool> {
    let regex = (*SHARED_DIGITS).as_ref().map_err(Clone::clone)?;
    Ok(regex.is_match(candidate))
}

/// Owns one compiled engine and checks any number of candidates against it.
#[derive(Debug, Clone)]
pub struct DigitMatcher {
    regex: Regex,
}

impl DigitMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: compile_full_match(DIGITS_PATTERN)?,
        })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    pub fn check_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<bool> {
        inputs
            .iter()
            .map(|s| {
                let candidate: &str = s.as_ref();
                let matched = self.matches(candidate);
                debug!(candidate, matched, strategy = "reuse", "digit check");
                matched
            })
            .collect()
    }
}
