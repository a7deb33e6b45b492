//! egui rendering for conversation previews.
//!
//! - `conversation_content`: icon + clipped preview text for one conversation
//! - `conversation_list`: side panel listing conversations with unread badges

mod conversation_content;
mod conversation_list;

pub use conversation_content::*;
pub use conversation_list::*;
