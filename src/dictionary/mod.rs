//! Spell checking
//!
//! Validation only needs to ask "is this word misspelled?". The `SpellChecker`
//! trait is that seam; `Dictionary` is the word-list backed implementation
//! shipped with the game.

use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Language a spell checker is asked about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Something that can tell whether a word is spelled correctly
pub trait SpellChecker {
    /// Returns `true` if `word` is not a recognised word in `language`
    fn is_misspelled(&self, word: &str, language: Language) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_misspelled(&self, word: &str, language: Language) -> bool {
        (**self).is_misspelled(word, language)
    }
}

/// Failure to load a dictionary file
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary {} could not be loaded", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Set of known words for a single language
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    language: Language,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build an English dictionary from any list of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, Language, SpellChecker};
    ///
    /// let dictionary = Dictionary::from_words(["late", "Dial"]);
    /// assert!(!dictionary.is_misspelled("dial", Language::English));
    /// assert!(dictionary.is_misspelled("dalt", Language::English));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: Language::English,
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref().trim()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unavailable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| DictionaryError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(words);
        log::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
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

impl SpellChecker for Dictionary {
    fn is_misspelled(&self, word: &str, language: Language) -> bool {
        language != self.language || !self.contains(word)
    }
}
