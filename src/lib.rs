//! Conversation list previews.
//!
//! Turns the last message of a conversation into a one-line preview: icon,
//! clipped text with mention markup rewritten, and unread emphasis. The
//! `ui` module draws previews with egui; everything else is UI-agnostic.

pub mod app;
pub mod config;
pub mod error;
pub mod mentions;
pub mod message;
pub mod preview;
pub mod text;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod integration_tests;

pub use mentions::rewrite_mentions;
pub use message::{Message, MessageKind};
pub use preview::{build_preview, describe, ConversationPreview, PreviewDescriptor, PreviewIcon};
pub use theme::PreviewTheme;
