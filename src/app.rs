use std::path::PathBuf;

use eframe::egui;

use crate::config::{load_settings_from, save_settings_to, settings_path, Settings};
use crate::mentions::{find_mentions, rewrite_mentions};
use crate::message::{Message, MessageKind};
use crate::theme::PreviewTheme;
use crate::ui::{render_conversation_list, ConversationEntry};

pub struct PreviewApp {
    pub conversations: Vec<ConversationEntry>,
    pub selected: Option<usize>,
    pub settings: Settings,
    pub theme: PreviewTheme,
    /// Where settings changes are written; `None` keeps them in memory
    pub settings_path: Option<PathBuf>,
}

impl PreviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let path = settings_path()
            .inspect_err(|e| tracing::warn!(error = %e, "settings will not be saved"))
            .ok();
        let settings = path
            .as_deref()
            .map(load_settings_from)
            .transpose()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to load settings, using defaults");
                None
            })
            .unwrap_or_default();

        let app =
            Self::with_settings(settings, sample_conversations()).with_settings_path(path);
        cc.egui_ctx.set_visuals(if app.theme.name == "light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        });
        app
    }

    pub fn with_settings(settings: Settings, conversations: Vec<ConversationEntry>) -> Self {
        let theme = settings.resolve_theme().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid theme in settings, using dark");
            PreviewTheme::dark()
        });
        Self {
            conversations,
            selected: None,
            settings,
            theme,
            settings_path: None,
        }
    }

    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    pub fn set_show_mention_ids(&mut self, show: bool) {
        self.settings.show_mention_ids = show;
        self.persist_settings();
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = save_settings_to(path, &self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }

    /// Flip between the dark and light presets and persist the choice
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        let dark = self.theme.name != "dark";
        self.theme = PreviewTheme::for_visuals(dark);
        self.settings.theme = self.theme.name.clone();
        self.settings.custom_theme = None;
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.persist_settings();
    }

    fn render_details(&self, ui: &mut egui::Ui) {
        let Some(entry) = self.selected.and_then(|i| self.conversations.get(i)) else {
            ui.weak("Select a conversation");
            return;
        };

        let message = &entry.last_message;
        ui.heading(&entry.title);
        ui.label(format!(
            "{} message, {} unread{}",
            message.kind,
            message.unread_count,
            if message.is_private { ", private" } else { "" }
        ));
        ui.separator();

        let Some(content) = message.content.as_deref() else {
            ui.weak("(no content)");
            return;
        };
        ui.label(rewrite_mentions(content).into_owned());

        if self.settings.show_mention_ids {
            let mentions = find_mentions(content);
            if !mentions.is_empty() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Mentions").strong());
                for m in mentions {
                    let id = m
                        .user_id
                        .map_or_else(|| "?".to_string(), |id| id.to_string());
                    ui.label(format!("@{} (user {})", m.display_name, id));
                }
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.theme.name == "dark" { "☀ Light" } else { "🌙 Dark" };
                if ui.button(label).clicked() {
                    self.toggle_theme(ctx);
                }
                let mut show_ids = self.settings.show_mention_ids;
                if ui.checkbox(&mut show_ids, "Show mention ids").changed() {
                    self.set_show_mention_ids(show_ids);
                }
            });
        });

        render_conversation_list(ctx, &self.conversations, &mut self.selected, &self.theme);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_details(ui);
        });
    }
}

pub fn sample_conversations() -> Vec<ConversationEntry> {
    vec![
        ConversationEntry::new(
            "Ann Lee",
            Message::new(
                "[@J%C3%B8hn](mention://user/3/J%C3%B8hn) can you check the invoice from last week?",
                MessageKind::Incoming,
            )
            .with_unread(2),
        ),
        ConversationEntry::new(
            "Billing",
            Message::new(
                "Refund approved, [@Ann](mention://user/7/Ann) please confirm with the customer",
                MessageKind::Outgoing,
            )
            .private(true),
        ),
        ConversationEntry::new(
            "Website visitor",
            Message::new("Thanks, that fixed it!", MessageKind::Outgoing),
        ),
        ConversationEntry::new(
            "Priya",
            Message::new(
                "Conversation was assigned to Priya by the round-robin rule",
                MessageKind::Activity,
            )
            .with_unread(1),
        ),
        ConversationEntry::new(
            "Unknown",
            Message {
                content: None,
                ..Default::default()
            },
        ),
    ]
}
