//! Character-boundary truncation.

/// Returns the first `max_chars` Unicode scalar values of `text`.
///
/// Text at or below the limit is returned unchanged, so applying the same
/// limit twice is a no-op.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
