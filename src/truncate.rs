/// Appended when a body is cut at the character budget.
pub const TRUNCATION_MARKER: &str = "... (content truncated)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    pub content: String,
    pub was_truncated: bool,
}

/// Keep at most `max_chars` characters of `text`, appending
/// [`TRUNCATION_MARKER`] if anything was dropped.
///
/// Characters are Unicode scalar values, so multi-byte text is never split
/// inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> Truncated {
    let cut = match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => byte_idx,
        None => {
            return Truncated {
                content: text.to_string(),
                was_truncated: false,
            }
        }
    };

    let mut content = String::with_capacity(cut + TRUNCATION_MARKER.len());
    content.push_str(&text[..cut]);
    content.push_str(TRUNCATION_MARKER);
    Truncated {
        content,
        was_truncated: true,
    }
}
