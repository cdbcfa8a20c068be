//! End-to-end game flow through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::core::{GameSession, SubmissionResult, Validator, is_original, is_possible};
use word_scramble::dictionary::{Dictionary, Language, SpellChecker};
use word_scramble::wordlists::WordBank;

/// Spell checker that only knows a fixed handful of words
struct FixedChecker(&'static [&'static str]);

impl SpellChecker for FixedChecker {
    fn is_misspelled(&self, word: &str, language: Language) -> bool {
        language != Language::English || !self.0.iter().any(|known| *known == word)
    }
}

#[test]
fn late_is_accepted_from_validate() {
    let bank = WordBank::from_text("validate\n");
    let validator = Validator::new(FixedChecker(&["late"]));
    let mut session = GameSession::new();

    let root = session
        .reset_with(&bank, &mut StdRng::seed_from_u64(0))
        .map(str::to_string);
    assert_eq!(root.as_deref(), Some("validate"));
    assert!(session.used_words().is_empty());

    assert!(is_possible("late", "validate"));
    assert!(is_original("late", session.used_words()));

    let result = validator.validate("late", "validate", session.used_words());
    assert_eq!(result, SubmissionResult::Accepted);

    session.record("late");
    assert_eq!(session.used_words(), &["late"]);
}

#[test]
fn failed_validation_leaves_session_unchanged() {
    let bank = WordBank::from_text("validate");
    let validator = Validator::new(Dictionary::embedded());
    let mut session = GameSession::new();
    session.reset(&bank);
    session.submit("dial", &validator);

    let before = session.clone();
    for candidate in ["dialed", "DIAL", "tadil"] {
        assert!(!session.submit(candidate, &validator).is_accepted());
    }
    assert_eq!(session, before);
}

#[test]
fn words_are_listed_newest_first() {
    let bank = WordBank::from_text("validate");
    let validator = Validator::new(Dictionary::embedded());
    let mut session = GameSession::new();
    session.reset(&bank);

    for word in ["late", "Dial", "tidal"] {
        assert_eq!(session.submit(word, &validator), SubmissionResult::Accepted);
    }

    assert_eq!(session.used_words(), &["tidal", "Dial", "late"]);
}

#[test]
fn new_game_replaces_root_and_words() {
    let bank = WordBank::from_text("mountain");
    let validator = Validator::new(Dictionary::embedded());
    let mut session = GameSession::new();
    session.start_with("validate");
    session.submit("late", &validator);

    assert_eq!(session.reset(&bank), Some("mountain"));
    assert!(session.used_words().is_empty());
    assert_eq!(session.submit("late", &validator), SubmissionResult::RejectedNotPossible);
}

#[test]
fn ordinary_words_are_real() {
    let validator = Validator::new(Dictionary::embedded());
    let mut session = GameSession::new();
    session.start_with("validate");

    for word in ["teal", "alive", "vital", "tidal"] {
        assert_eq!(session.submit(word, &validator), SubmissionResult::Accepted);
    }
}
