//! Root word bank
//!
//! The immutable list of words a game can start from.

use super::loader::{load_from_file, parse_lines, words_from_slice};
use super::START_WORDS;
use crate::core::normalize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Where the root words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited text file
    File(PathBuf),
}

/// Failure to load a word bank
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("word list {} could not be loaded", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Candidate root words, loaded once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Load a bank from `source`
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Unavailable` if a file source cannot be read.
    /// An empty file is not an error; it yields an empty bank.
    pub fn load(source: &WordSource) -> Result<Self, WordBankError> {
        let bank = match source {
            WordSource::Embedded => Self::embedded(),
            WordSource::File(path) => {
                let words =
                    load_from_file(path).map_err(|source| WordBankError::Unavailable {
                        path: path.clone(),
                        source,
                    })?;
                Self { words }
            }
        };

        log::info!("Loaded {} root words from {source:?}", bank.len());
        Ok(bank)
    }

    /// Bank built from the embedded start words
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: words_from_slice(START_WORDS),
        }
    }

    /// Bank built from a newline-delimited blob
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_text("validate\nsilkworm\n");
    /// assert_eq!(bank.words(), &["validate", "silkworm"]);
    /// ```
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        Self {
            words: parse_lines(content),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordBank {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| {
                    let word: String = w.into();
                    normalize(&word)
                })
                .collect(),
        }
    }
}
