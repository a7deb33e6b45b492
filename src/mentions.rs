//! Mention markup rewriting.
//!
//! Composed messages embed mentions as Markdown-style links:
//!
//! ```text
//! [@display name](mention://user/<id>/<url-encoded name>)
//! ```
//!
//! Previews show them as plain `@display name`. The display name may itself be
//! percent-encoded; names that do not decode cleanly are shown as written.

use std::borrow::Cow;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[@([^\]]+)\]\(mention://user/([0-9]+)/([^)]+)\)")
        .expect("mention regex pattern is valid")
});

/// A mention token found in message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Byte range of the whole token in the source text
    pub span: Range<usize>,
    /// Display name after percent-decoding (or as written if decoding failed)
    pub display_name: String,
    /// `None` when the id does not fit in a u64
    pub user_id: Option<u64>,
    /// Trailing link segment, left encoded
    pub encoded_name: String,
}

/// Replace every mention token with `@` + decoded display name.
///
/// Each token is replaced at its own position in a left-to-right pass. A
/// decoded name, or a rewrite next to stray brackets, can spell out a new
/// token; passes repeat until none is left. Every pass strictly shrinks the
/// text, so this terminates. Text without mentions is returned borrowed.
pub fn rewrite_mentions(text: &str) -> Cow<'_, str> {
    let mut current = match rewrite_pass(text) {
        Cow::Borrowed(unchanged) => return Cow::Borrowed(unchanged),
        Cow::Owned(rewritten) => rewritten,
    };
    loop {
        let next = match rewrite_pass(&current) {
            Cow::Borrowed(_) => break,
            Cow::Owned(rewritten) => rewritten,
        };
        current = next;
    }
    Cow::Owned(current)
}

fn rewrite_pass(text: &str) -> Cow<'_, str> {
    MENTION_RE.replace_all(text, |caps: &Captures| {
        format!("@{}", decode_display_name(&caps[1]))
    })
}

/// List the mention tokens in `text`, in order of appearance.
pub fn find_mentions(text: &str) -> Vec<Mention> {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Mention {
                span: whole.range(),
                display_name: decode_display_name(&caps[1]).into_owned(),
                user_id: caps[2].parse().ok(),
                encoded_name: caps[3].to_string(),
            })
        })
        .collect()
}

/// Percent-decode a mention display name.
///
/// Strict about escapes: a `%` not followed by two hex digits, or escapes that
/// decode to invalid UTF-8, make the whole name fall back to the raw input.
pub fn decode_display_name(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }

    if !has_well_formed_escapes(raw) {
        tracing::debug!(name = raw, "malformed percent escape in mention name");
        return Cow::Borrowed(raw);
    }

    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::debug!(name = raw, error = %e, "mention name is not valid UTF-8");
            Cow::Borrowed(raw)
        }
    }
}

fn has_well_formed_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex_pair = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !hex_pair {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
