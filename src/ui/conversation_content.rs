//! Single-line message preview under a conversation title.

use eframe::egui::{self, Color32, RichText};

use crate::preview::{ConversationPreview, PreviewDescriptor};
use crate::theme::PreviewTheme;

/// Font size of the preview text (between egui's small and body styles)
pub const PREVIEW_TEXT_SIZE: f32 = 12.0;

/// Draw the icon and clipped text of a preview.
pub fn render_conversation_content(
    ui: &mut egui::Ui,
    preview: &ConversationPreview,
    theme: &PreviewTheme,
) -> egui::Response {
    let descriptor = &preview.descriptor;
    let color = resolve_text_color(ui, theme);

    ui.add_space(theme.spacing.tiny);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        if let Some(icon) = descriptor.icon {
            ui.label(
                RichText::new(icon.glyph())
                    .size(descriptor.icon_size)
                    .color(color),
            )
            .on_hover_text(icon.name());
            ui.add_space(theme.spacing.micro);
        }

        ui.add(
            egui::Label::new(preview_rich_text(preview, color))
                .wrap_mode(preview_wrap_mode(descriptor)),
        );
    })
    .response
}

/// Single-line previews are clipped; taller ones wrap.
pub(crate) fn preview_wrap_mode(descriptor: &PreviewDescriptor) -> egui::TextWrapMode {
    if descriptor.max_lines <= 1 {
        egui::TextWrapMode::Truncate
    } else {
        egui::TextWrapMode::Wrap
    }
}

pub(crate) fn preview_rich_text(preview: &ConversationPreview, color: Color32) -> RichText {
    let rich = RichText::new(&preview.text)
        .size(PREVIEW_TEXT_SIZE)
        .color(color);
    if preview.descriptor.bold {
        rich.strong()
    } else {
        rich
    }
}

/// Theme text color, or the host's own text color if the theme value is bad
fn resolve_text_color(ui: &egui::Ui, theme: &PreviewTheme) -> Color32 {
    theme.text_color().unwrap_or_else(|e| {
        tracing::debug!(theme = %theme.name, error = %e, "falling back to visuals text color");
        ui.visuals().text_color()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Message, MessageKind};
    use crate::preview::build_preview;
    use crate::theme::ThemeColors;

    fn render_headless(preview: &ConversationPreview, theme: &PreviewTheme) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_conversation_content(ui, preview, theme);
            });
        });
    }

    #[test]
    fn test_renders_every_branch() {
        let messages = [
            Message::new("secret note", MessageKind::Outgoing).private(true),
            Message::new("sent reply", MessageKind::Outgoing).with_unread(1),
            Message::new("assigned to Ann", MessageKind::Activity),
            Message::new("[@Ann](mention://user/7/Ann) hello", MessageKind::Incoming)
                .with_unread(4),
            Message::default(),
        ];
        for msg in &messages {
            render_headless(&build_preview(msg), &PreviewTheme::dark());
        }
    }

    #[test]
    fn test_bad_theme_color_still_renders() {
        let theme = PreviewTheme {
            colors: ThemeColors {
                text: "not-a-color".to_string(),
            },
            ..PreviewTheme::light()
        };
        let preview = build_preview(&Message::new("hi", MessageKind::Activity));
        render_headless(&preview, &theme);
    }

    #[test]
    fn test_wrap_mode_follows_max_lines() {
        let mut preview = build_preview(&Message::new("hello there", MessageKind::Outgoing));
        assert_eq!(
            preview_wrap_mode(&preview.descriptor),
            egui::TextWrapMode::Truncate
        );

        preview.descriptor.max_lines = 2;
        assert_eq!(preview_wrap_mode(&preview.descriptor), egui::TextWrapMode::Wrap);
        render_headless(&preview, &PreviewTheme::dark());
    }

    #[test]
    fn test_rich_text_keeps_preview_text() {
        let preview = build_preview(&Message::new("hello there", MessageKind::Incoming));
        let rich = preview_rich_text(&preview, Color32::WHITE);
        assert_eq!(rich.text(), "hello there");
    }
}
