//! Game session state
//!
//! A session holds the current root word and the words accepted so far,
//! most recent first. Both change together on reset.

use super::letters::normalize;
use super::submission::SubmissionResult;
use super::validator::Validator;
use crate::dictionary::SpellChecker;
use crate::wordlists::WordBank;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// The single active game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    root: Option<String>,
    used_words: Vec<String>,
}

impl GameSession {
    /// A session with no root word yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game with a root word drawn uniformly from `bank`
    ///
    /// Clears the used words. Returns `None` and leaves the session without a
    /// root word if the bank is empty.
    pub fn reset(&mut self, bank: &WordBank) -> Option<&str> {
        self.reset_with(bank, &mut rand::rng())
    }

    /// Same as [`GameSession::reset`] with a caller-supplied random source
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::core::GameSession;
    /// use word_scramble::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_text("validate");
    /// let mut session = GameSession::new();
    /// let root = session.reset_with(&bank, &mut StdRng::seed_from_u64(1));
    /// assert_eq!(root, Some("validate"));
    /// ```
    pub fn reset_with<R: Rng + ?Sized>(&mut self, bank: &WordBank, rng: &mut R) -> Option<&str> {
        let root = bank.words().choose(rng).cloned();

        match &root {
            Some(word) => log::info!("New game with root word '{word}'"),
            None => log::warn!("Word bank is empty, no root word available"),
        }

        self.root = root;
        self.used_words.clear();
        self.root.as_deref()
    }

    /// Start a new game with a specific root word
    pub fn start_with(&mut self, root: &str) {
        self.root = Some(normalize(root));
        self.used_words.clear();
    }

    /// Current root word, if a game is running
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Insert an already validated word at the front of the used words
    ///
    /// The word is stored as typed.
    pub fn record(&mut self, word: impl Into<String>) {
        self.used_words.insert(0, word.into());
    }

    /// Validate `candidate` against this session and record it if accepted
    ///
    /// Without a root word every candidate is reported as not possible.
    pub fn submit<C: SpellChecker>(
        &mut self,
        candidate: &str,
        validator: &Validator<C>,
    ) -> SubmissionResult {
        let Some(root) = self.root.as_deref() else {
            return SubmissionResult::RejectedNotPossible;
        };

        let result = validator.validate(candidate, root, &self.used_words);
        if result.is_accepted() {
            self.record(candidate);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_session_has_no_root() {
        let session = GameSession::new();
        assert_eq!(session.root(), None);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn reset_draws_from_bank() {
        let bank = WordBank::from_text("alphabet\nsilkworm\nvalidate");
        let mut session = GameSession::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let root = session.reset_with(&bank, &mut rng).unwrap().to_string();
            assert!(bank.words().contains(&root));
            assert!(session.used_words().is_empty());
        }
    }

    #[test]
    fn reset_eventually_picks_every_word() {
        let bank = WordBank::from_text("alphabet\nsilkworm\nvalidate");
        let mut session = GameSession::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            if let Some(root) = session.reset_with(&bank, &mut rng) {
                seen.insert(root.to_string());
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn reset_clears_used_words() {
        let bank = WordBank::from_text("validate");
        let mut session = GameSession::new();
        session.reset(&bank);
        session.record("late");
        session.record("dial");

        assert_eq!(session.reset(&bank), Some("validate"));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn reset_on_empty_bank() {
        let mut session = GameSession::new();
        session.start_with("validate");
        session.record("late");

        assert_eq!(session.reset(&WordBank::default()), None);
        assert_eq!(session.root(), None);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn record_prepends() {
        let mut session = GameSession::new();
        session.start_with("validate");
        session.record("late");
        session.record("Dial");

        assert_eq!(session.used_words(), &["Dial", "late"]);
    }

    #[test]
    fn start_with_lowercases_root() {
        let mut session = GameSession::new();
        session.start_with("VALIDATE");
        assert_eq!(session.root(), Some("validate"));
    }

    #[test]
    fn submit_records_only_accepted() {
        let validator = Validator::new(Dictionary::from_words(["late", "dial"]));
        let mut session = GameSession::new();
        session.start_with("validate");

        assert_eq!(
            session.submit("Late", &validator),
            SubmissionResult::Accepted
        );
        assert_eq!(
            session.submit("late", &validator),
            SubmissionResult::RejectedNotOriginal
        );
        assert_eq!(
            session.submit("dialed", &validator),
            SubmissionResult::RejectedNotPossible
        );
        assert_eq!(
            session.submit("tadl", &validator),
            SubmissionResult::RejectedNotReal
        );
        assert_eq!(session.used_words(), &["Late"]);

        assert_eq!(
            session.submit("dial", &validator),
            SubmissionResult::Accepted
        );
        assert_eq!(session.used_words(), &["dial", "Late"]);
    }

    #[test]
    fn submit_without_root() {
        let validator = Validator::new(Dictionary::embedded());
        let mut session = GameSession::new();
        assert_eq!(
            session.submit("late", &validator),
            SubmissionResult::RejectedNotPossible
        );
        assert!(session.used_words().is_empty());
    }
}
