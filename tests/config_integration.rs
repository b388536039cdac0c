// SPDX-License-Identifier: MPL-2.0
use attachment_approval::attachment::Attachment;
use attachment_approval::config::{self, Config, PresentationMode, MIN_TEXT_LIMIT_BYTES};
use attachment_approval::i18n::fluent::I18n;
use attachment_approval::ui::approval::{caption, page, ApprovalConfig, Message, State};
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_with_override(&settings, base.clone()).expect("save en-US");
    let (loaded, warning) = config::load_with_override(base.clone());
    assert!(warning.is_none());
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    settings.general.language = Some("fr".to_string());
    config::save_with_override(&settings, base.clone()).expect("save fr");
    let (loaded, _) = config::load_with_override(base);
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("approval-send-button"), "Envoyer");
}

#[test]
fn caption_ceiling_from_settings_bounds_editing() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("settings.toml"),
        "[caption]\nmax_caption_bytes = 20\n\n[display]\npresentation_mode = \"shared-navigation\"\n",
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.presentation_mode(), PresentationMode::SharedNavigation);

    let (mut state, _) = State::new(
        vec![Attachment::from_path("a.jpg")],
        ApprovalConfig::from_config(&loaded),
    )
    .expect("non-empty flow");
    let id = state.current();
    state.handle_message(Message::Page(
        id,
        page::Message::Caption(caption::Message::Edited("x".repeat(64))),
    ));

    let stored = state
        .collection()
        .get(id)
        .and_then(|item| item.caption())
        .map(str::len);
    assert_eq!(stored, Some(20));
}

#[test]
fn out_of_range_limits_are_clamped() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("settings.toml"),
        "[caption]\nmax_caption_bytes = 1\n",
    )
    .expect("write settings");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.max_caption_bytes(), MIN_TEXT_LIMIT_BYTES);
}

#[test]
fn malformed_settings_fall_back_with_warning() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("settings.toml"), "caption = [").expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
