//! Formatting utilities for terminal output

/// Spell a word out as spaced capital tiles, e.g. `V A L I D A T E`
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Group words by length, longest first, for column display
#[must_use]
pub fn group_by_length(words: &[String]) -> Vec<(usize, Vec<&str>)> {
    let mut groups: Vec<(usize, Vec<&str>)> = Vec::new();

    for word in words {
        let len = word.chars().count();
        match groups.iter_mut().find(|(l, _)| *l == len) {
            Some((_, group)) => group.push(word),
            None => groups.push((len, vec![word.as_str()])),
        }
    }

    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}
