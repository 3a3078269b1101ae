//! Shared utility functions.

/// Truncate a string to at most `max_len` bytes, appending `...` when text
/// was cut. The cut point backs up to a valid UTF-8 character boundary.
pub fn truncate_ellipsis(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
