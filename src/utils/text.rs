//! Text normalization helpers.

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text, or `None` when nothing but whitespace remains.
pub fn non_empty(text: &str) -> Option<String> {
    let normalized = normalize_whitespace(text);
    (!normalized.is_empty()).then_some(normalized)
}

/// Length in characters (not bytes) of the trimmed text.
pub fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Shortens `text` to at most `max` characters, marking the cut with "...".
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
