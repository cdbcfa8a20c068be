//! Solutions command
//!
//! Lists every dictionary word that can be spelled from a root word.

use crate::core::{LetterPool, normalize};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use std::cmp::Reverse;

/// All words spellable from a root
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
}

/// Find every dictionary word that is possible from `root`
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
/// use word_scramble::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["tidal", "dial", "dialed"]);
/// let result = find_solutions("validate", &dictionary);
/// assert_eq!(result.words, vec!["tidal", "dial"]);
/// ```
#[must_use]
pub fn find_solutions(root: &str, dictionary: &Dictionary) -> SolutionsResult {
    let pool = LetterPool::new(root);
    let words: Vec<&str> = dictionary.words().collect();

    let mut found: Vec<String> = words
        .par_iter()
        .filter(|word| pool.can_spell(word))
        .map(|&word| word.to_string())
        .collect();

    found.sort_by(|a, b| {
        Reverse(a.chars().count())
            .cmp(&Reverse(b.chars().count()))
            .then_with(|| a.cmp(b))
    });

    SolutionsResult {
        root: normalize(root),
        words: found,
    }
}

/// Count spellable dictionary words without collecting them
#[must_use]
pub fn count_solutions(root: &str, dictionary: &Dictionary) -> usize {
    let pool = LetterPool::new(root);
    dictionary.words().filter(|word| pool.can_spell(word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_are_possible_and_ordered() {
        let dictionary = Dictionary::from_words(["late", "tale", "dial", "tidal", "zebra", "a"]);
        let result = find_solutions("Validate", &dictionary);

        assert_eq!(result.root, "validate");
        assert_eq!(result.words, vec!["tidal", "dial", "late", "tale", "a"]);
    }

    #[test]
    fn solutions_include_root() {
        let dictionary = Dictionary::embedded();
        let result = find_solutions("validate", &dictionary);
        assert!(result.words.iter().any(|w| w == "validate"));
        assert!(result.words.iter().any(|w| w == "late"));
        assert!(!result.words.iter().any(|w| w == "dialed"));
    }

    #[test]
    fn count_matches_find() {
        let dictionary = Dictionary::embedded();
        let found = find_solutions("mountain", &dictionary);
        assert_eq!(count_solutions("mountain", &dictionary), found.words.len());
    }

    #[test]
    fn no_solutions_for_empty_root() {
        let dictionary = Dictionary::embedded();
        assert!(find_solutions("", &dictionary).words.is_empty());
    }
}
