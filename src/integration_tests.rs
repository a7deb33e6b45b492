//! Integration tests for convo-preview
//!
//! These tests exercise full workflows across modules: message parsing,
//! mention rewriting, preview selection and settings-driven themes.

use crate::app::{sample_conversations, PreviewApp};
use crate::config::{load_settings_from, save_settings_to, Settings};
use crate::mentions::rewrite_mentions;
use crate::message::{Message, MessageKind};
use crate::preview::{build_preview, PreviewIcon};
use crate::text::NO_CONTENT_PLACEHOLDER;
use crate::theme::PreviewTheme;

/// Wire JSON through to the final preview
#[test]
fn test_json_message_to_preview() {
    let msg: Message = serde_json::from_str(
        r#"{
            "content": "[@Ann](mention://user/7/Ann) refund approved",
            "messageType": "1",
            "isPrivate": true,
            "unReadCount": 5
        }"#,
    )
    .unwrap();

    let preview = build_preview(&msg);
    assert_eq!(preview.descriptor.icon, Some(PreviewIcon::Lock));
    assert!(preview.descriptor.bold);
    assert_eq!(preview.text, "@Ann refund approved");
}

/// Icon choice across the kind/privacy matrix
#[test]
fn test_icon_matrix() {
    let cases = [
        (MessageKind::Outgoing, true, Some(PreviewIcon::Lock)),
        (MessageKind::Outgoing, false, Some(PreviewIcon::ReplyArrow)),
        (MessageKind::Activity, true, Some(PreviewIcon::Info)),
        (MessageKind::Activity, false, Some(PreviewIcon::Info)),
        (MessageKind::Incoming, true, None),
        (MessageKind::Incoming, false, None),
    ];
    for (kind, is_private, icon) in cases {
        let msg = Message::new("hello", kind).private(is_private);
        assert_eq!(build_preview(&msg).descriptor.icon, icon, "{kind} private={is_private}");
    }
}

/// Unread count only toggles emphasis, never the text
#[test]
fn test_unread_does_not_change_text() {
    let text = "[@J%C3%B8hn](mention://user/3/J%C3%B8hn) are we still on for the demo tomorrow?";
    for kind in [MessageKind::Incoming, MessageKind::Outgoing, MessageKind::Activity] {
        let read = build_preview(&Message::new(text, kind));
        let unread = build_preview(&Message::new(text, kind).with_unread(5));
        assert_eq!(read.text, unread.text);
        assert!(!read.descriptor.bold);
        assert!(unread.descriptor.bold);
        assert_eq!(read.descriptor.icon, unread.descriptor.icon);
        assert_eq!(read.descriptor.max_chars, unread.descriptor.max_chars);
    }
}

#[test]
fn test_absent_and_empty_content() {
    let absent = Message {
        content: None,
        kind: MessageKind::Outgoing,
        ..Default::default()
    };
    assert_eq!(build_preview(&absent).text, NO_CONTENT_PLACEHOLDER);
    assert_eq!(
        build_preview(&Message::new("", MessageKind::Incoming)).text,
        "No content available"
    );
}

/// Decoding fallback flows through the whole pipeline
#[test]
fn test_bad_escape_in_preview() {
    let msg = Message::new("[@%E0%A4%A](mention://user/3/%E0%A4%A)", MessageKind::Incoming);
    assert_eq!(build_preview(&msg).text, "@%E0%A4%A");
}

#[test]
fn test_rewrite_is_idempotent_on_samples() {
    for entry in sample_conversations() {
        if let Some(content) = entry.last_message.content.as_deref() {
            let once = rewrite_mentions(content).into_owned();
            assert_eq!(rewrite_mentions(&once), once);
        }
    }
}

/// Samples cover every icon and the placeholder
#[test]
fn test_sample_conversations_cover_all_branches() {
    let previews: Vec<_> = sample_conversations()
        .iter()
        .map(|c| build_preview(&c.last_message))
        .collect();

    for icon in [PreviewIcon::Lock, PreviewIcon::ReplyArrow, PreviewIcon::Info] {
        assert!(previews.iter().any(|p| p.descriptor.icon == Some(icon)));
    }
    assert!(previews.iter().any(|p| p.descriptor.icon.is_none()));
    assert!(previews.iter().any(|p| p.text == NO_CONTENT_PLACEHOLDER));
    assert!(previews.iter().all(|p| !p.text.contains("mention://")));
}

/// Saved settings pick the theme used by the app
#[test]
fn test_settings_drive_app_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = Settings {
        theme: "light".into(),
        ..Default::default()
    };
    save_settings_to(&path, &settings).unwrap();

    let loaded = load_settings_from(&path).unwrap();
    let app = PreviewApp::with_settings(loaded, sample_conversations());
    assert_eq!(app.theme, PreviewTheme::light());
    assert_eq!(app.selected, None);

    // Bad theme names fall back to dark
    let app = PreviewApp::with_settings(
        Settings {
            theme: "neon".into(),
            ..Default::default()
        },
        Vec::new(),
    );
    assert_eq!(app.theme, PreviewTheme::dark());
}

/// Settings changed in the app are written back to its settings file
#[test]
fn test_mention_id_toggle_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut app = PreviewApp::with_settings(Settings::default(), sample_conversations())
        .with_settings_path(Some(path.clone()));
    app.set_show_mention_ids(true);
    assert!(load_settings_from(&path).unwrap().show_mention_ids);

    app.set_show_mention_ids(false);
    assert!(!load_settings_from(&path).unwrap().show_mention_ids);

    // Without a path the change stays in memory
    let mut detached = PreviewApp::with_settings(Settings::default(), Vec::new());
    detached.set_show_mention_ids(true);
    assert!(detached.settings.show_mention_ids);
}
