//! Preview selection for conversation list items.
//!
//! [`describe`] maps the message flags to a [`PreviewDescriptor`] (which icon,
//! how much text, whether to embolden). [`build_preview`] pairs that with the
//! display text. Drawing is left to [`crate::ui`].

use crate::mentions::rewrite_mentions;
use crate::message::{Message, MessageKind};
use crate::text::preview_text;

/// Text limit for incoming and outgoing messages
pub const MESSAGE_PREVIEW_CHARS: usize = 34;
/// Text limit for activity messages
pub const ACTIVITY_PREVIEW_CHARS: usize = 32;
/// Clipping hint handed to the text primitive
pub const DISPLAY_LIMIT: usize = 8;
pub const ICON_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewIcon {
    Lock,
    ReplyArrow,
    Info,
}

impl PreviewIcon {
    /// Icon-set identifier
    pub fn name(self) -> &'static str {
        match self {
            PreviewIcon::Lock => "lock-closed-outline",
            PreviewIcon::ReplyArrow => "arrow-reply-outline",
            PreviewIcon::Info => "info-outline",
        }
    }

    /// Glyph drawn when no icon font is loaded
    pub fn glyph(self) -> &'static str {
        match self {
            PreviewIcon::Lock => "🔒",
            PreviewIcon::ReplyArrow => "↩",
            PreviewIcon::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewDescriptor {
    pub icon: Option<PreviewIcon>,
    pub bold: bool,
    pub max_chars: usize,
    /// Lines the text may occupy; 1 means clip to a single line
    pub max_lines: usize,
    /// Max-length hint for hosts whose text primitive takes one. The egui
    /// renderer clips by width instead and ignores it.
    pub display_limit: usize,
    pub icon_size: f32,
}

/// Pick icon, emphasis and text limit for a conversation preview.
pub fn describe(kind: MessageKind, is_private: bool, unread_count: u32) -> PreviewDescriptor {
    let (icon, max_chars) = match kind {
        MessageKind::Outgoing if is_private => (Some(PreviewIcon::Lock), MESSAGE_PREVIEW_CHARS),
        MessageKind::Outgoing => (Some(PreviewIcon::ReplyArrow), MESSAGE_PREVIEW_CHARS),
        MessageKind::Activity => (Some(PreviewIcon::Info), ACTIVITY_PREVIEW_CHARS),
        MessageKind::Incoming | MessageKind::Template => (None, MESSAGE_PREVIEW_CHARS),
    };

    PreviewDescriptor {
        icon,
        bold: unread_count > 0,
        max_chars,
        max_lines: 1,
        display_limit: DISPLAY_LIMIT,
        icon_size: ICON_SIZE,
    }
}

/// A fully resolved preview, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationPreview {
    pub descriptor: PreviewDescriptor,
    pub text: String,
}

pub fn build_preview(message: &Message) -> ConversationPreview {
    let descriptor = describe(message.kind, message.is_private, message.unread_count);

    let content = message.content.as_deref().map(rewrite_mentions);
    tracing::debug!(
        raw = message.content.as_deref().unwrap_or_default(),
        rewritten = content.as_deref().unwrap_or_default(),
        kind = %message.kind,
        "building conversation preview"
    );

    let text = preview_text(content.as_deref(), descriptor.max_chars);
    ConversationPreview { descriptor, text }
}
