// SPDX-License-Identifier: MPL-2.0
//! Per-item page: the state that must survive paging away and back.
//!
//! A page owns its caption editor, its zoom level and (for video items) its
//! playback controller. It never reaches back into the paging controller;
//! everything the owner must react to is returned as an [`Effect`].

use super::{caption, playback};
use crate::attachment::{AttachmentId, AttachmentItem, AttachmentKind};
use crate::config::{
    DEFAULT_ZOOM_PERCENT, DEFAULT_ZOOM_STEP_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Page state for one attachment item.
#[derive(Debug, Clone)]
pub struct Page {
    item_id: AttachmentId,
    kind: AttachmentKind,
    title: String,
    error: Option<String>,
    preview: Option<image::Handle>,
    caption: caption::State,
    playback: Option<playback::State>,
    zoom_percent: f32,
    editing: bool,
}

/// Messages for a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Caption(caption::Message),
    Playback(playback::Message),
    BeginEditing,
    EndEditing,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Effects a page reports to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The caption was durably updated.
    CaptionChanged(String),
    /// The video on this page played to the end.
    PlaybackCompleted,
}

impl Page {
    /// Builds a fresh page bound to `item`.
    #[must_use]
    pub fn new(item: &AttachmentItem, max_caption_bytes: usize) -> Self {
        let attachment = item.attachment();
        let preview = attachment
            .has_still_image()
            .then(|| image::Handle::from_path(attachment.path()));
        let playback = attachment
            .is_video()
            .then(|| playback::State::new(attachment.duration().unwrap_or(Duration::ZERO)));

        Self {
            item_id: item.id(),
            kind: attachment.kind(),
            title: attachment.file_name(),
            error: attachment.error().map(str::to_string),
            preview,
            caption: caption::State::new(item.caption(), max_caption_bytes),
            playback,
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            editing: false,
        }
    }

    pub fn item_id(&self) -> AttachmentId {
        self.item_id
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    pub fn caption(&self) -> &caption::State {
        &self.caption
    }

    pub fn playback(&self) -> Option<&playback::State> {
        self.playback.as_ref()
    }

    pub fn zoom_percent(&self) -> f32 {
        self.zoom_percent
    }

    /// Whether the caption is being edited (the page is scaled down).
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(playback::State::is_playing)
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_percent = DEFAULT_ZOOM_PERCENT;
    }

    pub fn pause(&mut self) {
        if let Some(playback) = &mut self.playback {
            playback.pause();
        }
    }

    pub fn stop(&mut self) {
        if let Some(playback) = &mut self.playback {
            playback.stop();
        }
    }

    /// Progress tick forwarded to the playback controller.
    pub fn tick(&mut self, elapsed: Duration) -> Effect {
        match self.playback.as_mut().map(|playback| playback.advance(elapsed)) {
            Some(playback::Effect::Completed) => Effect::PlaybackCompleted,
            _ => Effect::None,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Caption(msg) => match self.caption.handle(msg) {
                caption::Effect::None => Effect::None,
                caption::Effect::Changed(text) => Effect::CaptionChanged(text),
                caption::Effect::FinishedEditing { changed } => {
                    self.editing = false;
                    changed.map_or(Effect::None, Effect::CaptionChanged)
                }
            },
            Message::Playback(msg) => match self.playback.as_mut().map(|p| p.handle(msg)) {
                Some(playback::Effect::Completed) => Effect::PlaybackCompleted,
                _ => Effect::None,
            },
            Message::BeginEditing => {
                self.editing = true;
                Effect::None
            }
            Message::EndEditing => {
                self.editing = false;
                Effect::None
            }
            Message::ZoomIn => {
                self.zoom_percent =
                    (self.zoom_percent + DEFAULT_ZOOM_STEP_PERCENT).min(MAX_ZOOM_PERCENT);
                Effect::None
            }
            Message::ZoomOut => {
                self.zoom_percent =
                    (self.zoom_percent - DEFAULT_ZOOM_STEP_PERCENT).max(MIN_ZOOM_PERCENT);
                Effect::None
            }
            Message::ResetZoom => {
                self.reset_zoom();
                Effect::None
            }
        }
    }
}

/// View context for rendering a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Page scale while the caption is edited (percent).
    pub editing_scale_percent: f32,
}

/// Renders the page body: media preview, playback controls, caption.
pub fn view<'a>(page: &'a Page, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let scale = if page.editing {
        ctx.editing_scale_percent / 100.0
    } else {
        1.0
    };

    let body: Element<'a, Message> = match (&page.error, &page.preview) {
        (Some(error), _) => column![
            text(page.title.clone()).size(typography::TITLE_MD),
            text(ctx.i18n.tr_with_args("page-attachment-error", &[("error", error.as_str())]))
                .size(typography::BODY)
                .color(ctx.colors.warning),
        ]
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .into(),
        (None, Some(handle)) => {
            let width = sizing::PAGE_PREVIEW_WIDTH * page.zoom_percent / 100.0 * scale;
            image(handle.clone()).width(Length::Fixed(width)).into()
        }
        (None, None) => {
            let label = match page.kind {
                AttachmentKind::Video => ctx.i18n.tr("page-kind-video"),
                AttachmentKind::Audio => ctx.i18n.tr("page-kind-audio"),
                AttachmentKind::Image | AttachmentKind::File => ctx.i18n.tr("page-kind-file"),
            };
            column![
                text(page.title.clone()).size(typography::TITLE_MD * scale),
                text(label).size(typography::BODY).color(ctx.colors.text_secondary),
            ]
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .into()
        }
    };

    let mut content = column![container(body).center_x(Length::Fill)]
        .spacing(spacing::SM)
        .width(Length::Fill);

    if page.preview.is_some() {
        let zoom_controls = row![
            button(text("-")).on_press(Message::ZoomOut).style(styles::button::overlay),
            button(text(format!("{:.0}%", page.zoom_percent)))
                .on_press(Message::ResetZoom)
                .style(styles::button::overlay),
            button(text("+")).on_press(Message::ZoomIn).style(styles::button::overlay),
        ]
        .spacing(spacing::XXS);
        content = content.push(container(zoom_controls).center_x(Length::Fill));
    }

    if let Some(playback) = &page.playback {
        content = content.push(playback::view(playback, ctx.i18n).map(Message::Playback));
    }

    let caption_row: Element<'a, Message> = if page.editing {
        let placeholder = ctx.i18n.tr("caption-placeholder");
        row![
            caption::view(&page.caption, &placeholder, ctx.i18n, ctx.colors)
                .map(Message::Caption),
            button(text(ctx.i18n.tr("caption-done-button")))
                .on_press(Message::EndEditing)
                .padding(spacing::XS),
        ]
        .spacing(spacing::XS)
        .into()
    } else {
        let label = if page.caption.is_empty() {
            ctx.i18n.tr("caption-add-button")
        } else {
            page.caption.text().to_string()
        };
        button(text(label).size(typography::BODY))
            .on_press(Message::BeginEditing)
            .padding(spacing::XS)
            .width(Length::Fill)
            .into()
    };

    content.push(caption_row).into()
}
