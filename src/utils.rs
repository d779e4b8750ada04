// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for console summaries.

/// Pluralize a noun for count summaries.
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s') || word.ends_with("ch") || word.ends_with("sh") {
        format!("{word}es")
    } else if word.ends_with('y') && !word.ends_with("ey") && !word.ends_with("ay") {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

/// Format a count with its noun, e.g. "1 image" or "3 images".
#[must_use]
pub fn count_noun(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {}", pluralize(word))
    }
}
