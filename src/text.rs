//! Text Utilities
//!
//! Hint parsing and preview truncation for long free-text fields.

/// Purchase card preview length
pub const CARD_PREVIEW_LIMIT: usize = 100;
/// Terms longer than this are collapsed in the details panel
pub const DETAILS_PREVIEW_LIMIT: usize = 420;

/// Split search hints on commas and newlines, dropping blank entries
pub fn split_hints(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .map(String::from)
        .collect()
}

/// Whether `text` has more than `limit` characters
pub fn is_longer_than(text: &str, limit: usize) -> bool {
    text.chars().nth(limit).is_some()
}

/// First `limit` characters plus an ellipsis, or the text itself when short
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
