//! Outcome of submitting a candidate word

use super::letters::normalize;
use std::fmt;

/// Result of validating a candidate against a game session
///
/// Rejections are reported in check order: a word that fails several checks
/// reports only the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionResult {
    /// Passed every check; the caller should record it
    Accepted,
    /// Cannot be spelled from the root word's letters
    RejectedNotPossible,
    /// Already accepted earlier in this session
    RejectedNotOriginal,
    /// Not recognised by the spell checker
    RejectedNotReal,
}

impl SubmissionResult {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Short headline shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Accepted => "Word accepted",
            Self::RejectedNotPossible => "Word not possible",
            Self::RejectedNotOriginal => "Word already used",
            Self::RejectedNotReal => "Word not recognised",
        }
    }

    /// Explanation shown under the title
    ///
    /// `root` is interpolated into the "not possible" message.
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::Accepted => "Nice one!".to_string(),
            Self::RejectedNotPossible => {
                format!("You can't spell that word from {}", normalize(root))
            }
            Self::RejectedNotOriginal => "Be more original!".to_string(),
            Self::RejectedNotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
