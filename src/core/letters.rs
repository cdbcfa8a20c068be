//! Letter multiset used by the feasibility check
//!
//! A `LetterPool` holds the letters of a root word with their multiplicities.
//! Spelling a candidate consumes letters from the pool, one occurrence per use.

use rustc_hash::FxHashMap;

/// Lowercase a word one character at a time
///
/// Every comparison in the game goes through this, so a word always
/// normalizes the same way whether it is a root, a candidate or a
/// dictionary entry. Unlike `str::to_lowercase` it has no context-sensitive
/// rules, e.g. a capital sigma always becomes `σ`.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("Validate"), "validate");
/// assert_eq!(normalize("ΣΑΣ"), "σασ");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// The letters of a word, each available as many times as it occurs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from the lowercased letters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("Letter");
    /// assert_eq!(pool.count('t'), 2);
    /// assert_eq!(pool.count('L'), 1);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in normalize(word).chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remaining occurrences of `letter` (case-insensitive)
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        letter
            .to_lowercase()
            .next()
            .and_then(|l| self.counts.get(&l).copied())
            .unwrap_or(0)
    }

    /// Total number of letters left in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool without modifying it
    ///
    /// Letters are consumed in order on a scratch copy; the first letter with
    /// no occurrence left fails the check.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut scratch = self.clone();
        normalize(word).chars().all(|letter| scratch.take(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let pool = LetterPool::new("validate");
        assert_eq!(pool.count('a'), 2);
        assert_eq!(pool.count('d'), 1);
        assert_eq!(pool.count('z'), 0);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn take_exhausts_letter() {
        let mut pool = LetterPool::new("dad");
        assert!(pool.take('d'));
        assert!(pool.take('d'));
        assert!(!pool.take('d'));
        assert!(pool.take('a'));
        assert!(pool.is_empty());
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::new("validate");
        assert!(pool.can_spell("dial"));
        assert!(pool.can_spell("late"));
        assert!(pool.can_spell("avid"));
        assert!(!pool.can_spell("dialed")); // needs two d's
        assert!(!pool.can_spell("valve")); // needs two v's
    }

    #[test]
    fn can_spell_is_case_insensitive() {
        let pool = LetterPool::new("Validate");
        assert!(pool.can_spell("DIAL"));
        assert!(pool.can_spell("Tidal"));
    }

    #[test]
    fn can_spell_does_not_consume() {
        let pool = LetterPool::new("tea");
        assert!(pool.can_spell("eat"));
        assert!(pool.can_spell("ate"));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn normalize_is_per_character() {
        assert_eq!(normalize("LATE"), "late");
        assert_eq!(normalize("ΣΑΣ"), normalize("σας".to_uppercase().as_str()));
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn empty_word_is_spellable() {
        assert!(LetterPool::new("root").can_spell(""));
        assert!(LetterPool::new("").can_spell(""));
        assert!(!LetterPool::new("").can_spell("a"));
    }
}
