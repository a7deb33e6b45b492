//! Conversation list panel: title, unread badge and message preview per row.

use eframe::egui::{self, Color32, RichText, Stroke};

use super::conversation_content::render_conversation_content;
use crate::message::Message;
use crate::preview::build_preview;
use crate::theme::PreviewTheme;

/// One row of the conversation list
#[derive(Debug, Clone)]
pub struct ConversationEntry {
    pub title: String,
    pub last_message: Message,
}

impl ConversationEntry {
    pub fn new(title: impl Into<String>, last_message: Message) -> Self {
        Self {
            title: title.into(),
            last_message,
        }
    }
}

/// Render the left conversation list panel.
pub fn render_conversation_list(
    ctx: &egui::Context,
    conversations: &[ConversationEntry],
    selected: &mut Option<usize>,
    theme: &PreviewTheme,
) {
    let visuals = ctx.style().visuals.clone();

    egui::SidePanel::left("conversations_panel")
        .resizable(true)
        .default_width(280.0)
        .min_width(200.0)
        .frame(
            egui::Frame::new()
                .fill(visuals.panel_fill)
                .inner_margin(egui::Margin::same(0))
                .stroke(Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color)),
        )
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space(16.0);
                ui.label(
                    RichText::new("CONVERSATIONS")
                        .size(11.0)
                        .strong()
                        .color(visuals.weak_text_color()),
                );
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for (idx, entry) in conversations.iter().enumerate() {
                        let is_selected = *selected == Some(idx);
                        if render_conversation_item(ui, idx, entry, is_selected, theme) {
                            *selected = Some(idx);
                        }
                    }
                });
        });
}

/// Render a single conversation row. Returns true when clicked.
fn render_conversation_item(
    ui: &mut egui::Ui,
    idx: usize,
    entry: &ConversationEntry,
    selected: bool,
    theme: &PreviewTheme,
) -> bool {
    let preview = build_preview(&entry.last_message);
    let unread = entry.last_message.unread_count;

    let bg_color = if selected {
        ui.visuals().selection.bg_fill.gamma_multiply(0.4)
    } else {
        Color32::TRANSPARENT
    };

    let inner = egui::Frame::new()
        .fill(bg_color)
        .inner_margin(egui::Margin::symmetric(16, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                let title = RichText::new(&entry.title).size(14.0);
                ui.label(if unread > 0 { title.strong() } else { title });

                if let Some(badge) = unread_badge_text(unread) {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(badge)
                                .size(10.0)
                                .color(Color32::WHITE)
                                .background_color(ui.visuals().selection.bg_fill),
                        );
                    });
                }
            });

            render_conversation_content(ui, &preview, theme);
        });

    let response = ui.interact(
        inner.response.rect,
        ui.id().with(("conversation", idx)),
        egui::Sense::click(),
    );
    response.clicked()
}

/// Badge label for an unread count, capped at "99+"
pub(crate) fn unread_badge_text(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        1..=99 => Some(unread.to_string()),
        _ => Some("99+".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    #[test]
    fn test_unread_badge_text() {
        assert_eq!(unread_badge_text(0), None);
        assert_eq!(unread_badge_text(1).as_deref(), Some("1"));
        assert_eq!(unread_badge_text(99).as_deref(), Some("99"));
        assert_eq!(unread_badge_text(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_list_renders_headless() {
        let conversations = vec![
            ConversationEntry::new(
                "Ann",
                Message::new("[@Ann](mention://user/7/Ann) ping", MessageKind::Incoming)
                    .with_unread(3),
            ),
            ConversationEntry::new(
                "Support",
                Message::new("internal note", MessageKind::Outgoing).private(true),
            ),
        ];
        let mut selected = Some(1);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_conversation_list(ctx, &conversations, &mut selected, &PreviewTheme::dark());
        });

        // No pointer input, so the selection is untouched
        assert_eq!(selected, Some(1));
    }
}
