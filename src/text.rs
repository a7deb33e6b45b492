//! Text clipping helpers for single-line previews.

/// Shown in place of a preview when the message has no text at all.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";

const ELLIPSIS: &str = "...";

/// Clip `text` to at most `limit` characters, ending in `...` when clipped.
///
/// Lengths are counted in Unicode scalar values so multibyte names are never
/// split in the middle of a character.
pub fn substring_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    if limit <= ELLIPSIS.len() {
        return ".".repeat(limit);
    }

    let mut out = String::with_capacity(limit);
    out.extend(text.chars().take(limit - ELLIPSIS.len()));
    out.push_str(ELLIPSIS);
    out
}

/// Preview line for possibly-missing content.
///
/// Absent and empty content both produce [`NO_CONTENT_PLACEHOLDER`].
pub fn preview_text(content: Option<&str>, limit: usize) -> String {
    match content {
        Some(text) if !text.is_empty() => substring_with_ellipsis(text, limit),
        _ => NO_CONTENT_PLACEHOLDER.to_string(),
    }
}
