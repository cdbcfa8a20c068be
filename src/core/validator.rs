//! Submission checks
//!
//! Three independent predicates decide whether a candidate is accepted:
//! it must be spellable from the root word, not already used, and a real word.
//! `Validator::validate` runs them in that order and stops at the first failure.

use super::letters::{LetterPool, normalize};
use super::submission::SubmissionResult;
use crate::dictionary::{Language, SpellChecker};

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Each letter of the root can be used at most once. Comparison is
/// case-insensitive. An empty candidate is always possible.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("dial", "validate"));
/// assert!(!is_possible("dialed", "validate"));
/// ```
#[must_use]
pub fn is_possible(candidate: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(candidate)
}

/// Check that `candidate` has not already been accepted
///
/// Comparison is case-insensitive, so "Late" and "late" are the same word.
#[must_use]
pub fn is_original<S: AsRef<str>>(candidate: &str, used_words: &[S]) -> bool {
    let candidate = normalize(candidate);
    !used_words
        .iter()
        .any(|used| normalize(used.as_ref()) == candidate)
}

/// Runs the submission checks against an injected spell checker
#[derive(Debug, Clone)]
pub struct Validator<C> {
    checker: C,
    language: Language,
}

impl<C: SpellChecker> Validator<C> {
    /// Create a validator checking English words with `checker`
    pub const fn new(checker: C) -> Self {
        Self {
            checker,
            language: Language::English,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn checker(&self) -> &C {
        &self.checker
    }

    /// Check that `candidate` is a recognised word
    #[must_use]
    pub fn is_real(&self, candidate: &str) -> bool {
        !self
            .checker
            .is_misspelled(&normalize(candidate), self.language)
    }

    /// Validate a raw candidate against a root word and the words used so far
    ///
    /// The candidate is normalized with [`normalize`] before any check. Checks short-circuit in
    /// the order possible, original, real.
    pub fn validate<S: AsRef<str>>(
        &self,
        candidate: &str,
        root: &str,
        used_words: &[S],
    ) -> SubmissionResult {
        let candidate = normalize(candidate);

        let result = if !is_possible(&candidate, root) {
            SubmissionResult::RejectedNotPossible
        } else if !is_original(&candidate, used_words) {
            SubmissionResult::RejectedNotOriginal
        } else if !self.is_real(&candidate) {
            SubmissionResult::RejectedNotReal
        } else {
            SubmissionResult::Accepted
        };

        log::debug!("'{candidate}' against '{root}': {result:?}");
        result
    }
}
