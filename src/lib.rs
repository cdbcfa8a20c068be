//! Word Scramble
//!
//! Make as many words as you can from the letters of a root word. Every
//! submission must be spellable from the root, not already used, and a real
//! word according to a pluggable spell checker.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{GameSession, SubmissionResult, Validator};
//! use word_scramble::dictionary::Dictionary;
//! use word_scramble::wordlists::WordBank;
//!
//! let bank = WordBank::from_text("validate");
//! let validator = Validator::new(Dictionary::embedded());
//!
//! let mut session = GameSession::new();
//! session.reset(&bank);
//!
//! assert_eq!(session.submit("late", &validator), SubmissionResult::Accepted);
//! assert_eq!(session.submit("late", &validator), SubmissionResult::RejectedNotOriginal);
//! ```

// Core domain types
pub mod core;

// Spell checking
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
