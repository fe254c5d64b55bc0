//! Numeric extraction from transcribed utterances

/// Collect every decimal digit of `text` in order and parse the
/// concatenation as a non-negative integer.
///
/// Everything that is not a digit is discarded, separators and sign
/// markers included, so "about 8 or 9 hours" yields 89 rather than either
/// number. Returns `None` when the text carries no digit at all, or when
/// the digit run does not fit in a `u64`.
pub fn extract_number(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
