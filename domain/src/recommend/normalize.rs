//! Text normalization for duplicate detection

/// Normalize text into a comparison key.
///
/// Lower-cases the input, replaces every character that is not a lowercase
/// Latin letter, digit, or whitespace with a space, then collapses whitespace
/// runs into single spaces and trims the ends. Total and deterministic —
/// there is no failure case.
///
/// Punctuation and casing therefore never defeat duplicate detection:
/// `"Best CRMs of 2025"` and `"best crms of 2025!"` normalize to the same
/// key. Anything beyond exact normalized equality (typos, reordered words)
/// is deliberately not detected.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
