//! Word lists for Word Scramble
//!
//! Embedded root words and dictionary compiled into the binary, plus loaders
//! for custom lists on disk.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError, WordSource};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
