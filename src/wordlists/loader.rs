//! Word list loading utilities
//!
//! Newline-delimited text is the only on-disk format: one word per line, no
//! header. Surrounding whitespace is trimmed, blank lines are skipped and
//! words are normalized to lowercase.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Split a newline-delimited blob into normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_lines;
///
/// let words = parse_lines("Silkworm\r\nvalidate\n\n");
/// assert_eq!(words, vec!["silkworm", "validate"]);
/// ```
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(normalize(trimmed))
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
