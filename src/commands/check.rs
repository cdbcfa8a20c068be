//! One-shot validation command
//!
//! Checks a single candidate against a root word and an optional list of
//! words already used.

use crate::core::{SubmissionResult, Validator, normalize};
use crate::dictionary::SpellChecker;

/// Result of checking one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub candidate: String,
    pub root: String,
    pub result: SubmissionResult,
}

/// Validate `candidate` against `root`
///
/// # Errors
///
/// Returns an error if the root word is empty.
pub fn check_word<C: SpellChecker>(
    candidate: &str,
    root: &str,
    used_words: &[String],
    validator: &Validator<C>,
) -> Result<CheckResult, String> {
    let root = root.trim();
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let result = validator.validate(candidate, root, used_words);

    Ok(CheckResult {
        candidate: candidate.to_string(),
        root: normalize(root),
        result,
    })
}
