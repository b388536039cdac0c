// SPDX-License-Identifier: MPL-2.0
//! Approval component: the paging controller that owns the attachment
//! collection and its pages.
//!
//! Navigation is synchronous: the current item changes as soon as a request
//! is handled. The page change itself is reported as a pending
//! [`Transition`], and the work that must follow it (moving the rail focus,
//! resetting the zoom of the page that was left, pausing its video) only runs
//! once [`Message::TransitionFinished`] is delivered.

use super::navigation::{Direction, Step, Transition};
use super::page_cache::PageCache;
use super::{page, rail, toolbar};
use crate::attachment::{
    thumbnail, Attachment, AttachmentId, AttachmentItem, AttachmentItemCollection, Thumbnail,
};
use crate::config::{Config, PresentationMode};
use crate::error::{Error, Result, ThumbnailError};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::time::Instant;
use iced::widget::{button, column, container, image, row, text, Button, Column};
use iced::{Alignment, Element, Length, Task};
use std::collections::HashMap;
use std::time::Duration;

/// Settings injected into the approval flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalConfig {
    pub max_caption_bytes: usize,
    pub max_message_bytes: usize,
    pub presentation_mode: PresentationMode,
    pub editing_scale_percent: f32,
    pub rail_thumbnail_px: u32,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ApprovalConfig {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_caption_bytes: config.max_caption_bytes(),
            max_message_bytes: config.max_message_bytes(),
            presentation_mode: config.presentation_mode(),
            editing_scale_percent: config.editing_scale_percent(),
            rail_thumbnail_px: config.rail_thumbnail_px(),
        }
    }

    #[must_use]
    pub fn with_presentation_mode(mut self, mode: PresentationMode) -> Self {
        self.presentation_mode = mode;
        self
    }
}

/// Messages handled by the approval component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Previous/next arrows or swipe.
    Navigate(Step),
    Rail(rail::Message),
    /// The host finished showing the page of a transition.
    TransitionFinished(Transition),
    ThumbnailLoaded(AttachmentId, std::result::Result<Thumbnail, ThumbnailError>),
    Page(AttachmentId, page::Message),
    Toolbar(toolbar::Message),
    /// The host adds attachments (usually after an add-more request).
    AppendAttachments(Vec<Attachment>),
    /// Playback progress tick.
    Tick(Instant),
}

/// Outcomes reported to the host.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The user confirmed: final ordered attachments with their captions.
    Approved {
        attachments: Vec<Attachment>,
        message_text: String,
    },
    /// The user backed out.
    Cancelled { attachments: Vec<Attachment> },
    CaptionChanged {
        id: AttachmentId,
        caption: Option<String>,
    },
    /// Only emitted in [`PresentationMode::SharedNavigation`].
    AddMoreRequested,
    PlaybackCompleted { id: AttachmentId },
}

/// Paging controller state.
#[derive(Debug)]
pub struct State {
    collection: AttachmentItemCollection,
    pages: PageCache,
    current: AttachmentId,
    pending_transition: Option<Transition>,
    rail_focus: AttachmentId,
    toolbar: toolbar::State,
    thumbnails: HashMap<AttachmentId, image::Handle>,
    /// Decode or read failures, shown on the rail instead of a thumbnail.
    thumbnail_failures: HashMap<AttachmentId, ThumbnailError>,
    config: ApprovalConfig,
    last_tick: Option<Instant>,
}

impl State {
    /// Starts the flow on the first attachment, without a transition.
    ///
    /// Returns the task requesting thumbnails for every item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] when `attachments` is empty.
    pub fn new(
        attachments: Vec<Attachment>,
        config: ApprovalConfig,
    ) -> Result<(Self, Task<Message>)> {
        let collection = AttachmentItemCollection::new(attachments);
        let first = collection.first().ok_or(Error::EmptyCollection)?;
        let current = first.id();

        let mut pages = PageCache::new(config.max_caption_bytes);
        pages.get_or_build(first);

        let state = Self {
            toolbar: toolbar::State::new(config.max_message_bytes),
            collection,
            pages,
            current,
            pending_transition: None,
            rail_focus: current,
            thumbnails: HashMap::new(),
            thumbnail_failures: HashMap::new(),
            config,
            last_tick: None,
        };

        let ids: Vec<AttachmentId> = state
            .collection
            .items()
            .iter()
            .map(AttachmentItem::id)
            .collect();
        let task = state.request_thumbnails(&ids);
        Ok((state, task))
    }

    pub fn collection(&self) -> &AttachmentItemCollection {
        &self.collection
    }

    pub fn pages(&self) -> &PageCache {
        &self.pages
    }

    /// Id of the displayed item.
    pub fn current(&self) -> AttachmentId {
        self.current
    }

    pub fn current_item(&self) -> Option<&AttachmentItem> {
        self.collection.get(self.current)
    }

    pub fn current_page(&self) -> Option<&page::Page> {
        self.pages.get(self.current)
    }

    pub fn pending_transition(&self) -> Option<Transition> {
        self.pending_transition
    }

    /// Item highlighted by the rail. Catches up with [`Self::current`] once
    /// the pending transition finishes.
    pub fn rail_focus(&self) -> AttachmentId {
        self.rail_focus
    }

    pub fn message_text(&self) -> &str {
        self.toolbar.message_text()
    }

    pub fn thumbnail(&self, id: AttachmentId) -> Option<&image::Handle> {
        self.thumbnails.get(&id)
    }

    pub fn config(&self) -> &ApprovalConfig {
        &self.config
    }

    pub fn presentation_mode(&self) -> PresentationMode {
        self.config.presentation_mode
    }

    /// Whether any page is playing, i.e. progress ticks are needed.
    pub fn is_playing(&self) -> bool {
        self.pages.pages().any(page::Page::is_playing)
    }

    pub fn can_remove(&self) -> bool {
        rail::allows_removal(self.collection.len())
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Navigate(step) => (Effect::None, self.navigate_relative(step)),
            Message::Rail(rail::Message::Tapped(id)) => (Effect::None, self.rail_tap(id)),
            Message::Rail(rail::Message::RemoveRequested(id)) => {
                (Effect::None, self.remove_item(id))
            }
            Message::TransitionFinished(transition) => {
                self.finish_transition(transition);
                (Effect::None, Task::none())
            }
            Message::ThumbnailLoaded(id, result) => {
                self.apply_thumbnail(id, result);
                (Effect::None, Task::none())
            }
            Message::Page(id, msg) => (self.handle_page_message(id, msg), Task::none()),
            Message::Toolbar(msg) => (self.handle_toolbar_message(msg), Task::none()),
            Message::AppendAttachments(attachments) => {
                let added = self.collection.append(attachments);
                tracing::debug!(count = added.len(), "appended attachments");
                (Effect::None, self.request_thumbnails(&added))
            }
            Message::Tick(now) => (self.tick(now), Task::none()),
        }
    }

    /// Shows `target`, building its page on first visit.
    fn navigate_to(&mut self, target: AttachmentId, direction: Direction) -> Task<Message> {
        if target == self.current {
            return Task::none();
        }
        let Some(item) = self.collection.get(target) else {
            tracing::error!(id = %target, "navigation to an attachment outside the collection");
            return Task::none();
        };
        self.pages.get_or_build(item);

        let transition = Transition {
            from: self.current,
            to: target,
            direction,
        };
        self.current = target;
        self.pending_transition = Some(transition);
        Task::done(Message::TransitionFinished(transition))
    }

    fn navigate_relative(&mut self, step: Step) -> Task<Message> {
        let neighbor = match step {
            Step::Next => self.collection.item_after(self.current),
            Step::Previous => self.collection.item_before(self.current),
        }
        .map(AttachmentItem::id);

        match neighbor {
            Some(target) => self.navigate_to(target, step.into()),
            None => Task::none(),
        }
    }

    fn rail_tap(&mut self, target: AttachmentId) -> Task<Message> {
        let (Some(from), Some(to)) = (
            self.collection.position(self.current),
            self.collection.position(target),
        ) else {
            tracing::error!(id = %target, "rail tap on an attachment outside the collection");
            return Task::none();
        };
        self.navigate_to(target, Direction::between(from, to))
    }

    fn remove_item(&mut self, id: AttachmentId) -> Task<Message> {
        if !self.collection.contains(id) {
            tracing::debug!(%id, "attachment already removed");
            return Task::none();
        }
        if !self.can_remove() {
            tracing::warn!(%id, "refusing to remove the only attachment");
            return Task::none();
        }

        let task = if id == self.current {
            let next = self.collection.item_after(id).map(AttachmentItem::id);
            let previous = self.collection.item_before(id).map(AttachmentItem::id);
            match (next, previous) {
                (Some(next), _) => self.navigate_to(next, Direction::Forward),
                (None, Some(previous)) => self.navigate_to(previous, Direction::Reverse),
                (None, None) => return Task::none(),
            }
        } else {
            Task::none()
        };

        self.collection.remove(id);
        self.pages.discard(id);
        self.thumbnails.remove(&id);
        self.thumbnail_failures.remove(&id);
        task
    }

    fn finish_transition(&mut self, transition: Transition) {
        if transition.from != self.current {
            if let Some(left) = self.pages.get_mut(transition.from) {
                left.reset_zoom();
                left.pause();
                self.last_tick = None;
            }
        }
        if self.pending_transition == Some(transition) {
            self.pending_transition = None;
            self.rail_focus = self.current;
        }
    }

    fn apply_thumbnail(
        &mut self,
        id: AttachmentId,
        result: std::result::Result<Thumbnail, ThumbnailError>,
    ) {
        match result {
            Ok(thumbnail) => match self.collection.get_mut(id) {
                Some(item) => {
                    item.set_thumbnail_size(thumbnail.size);
                    self.thumbnails.insert(id, thumbnail.handle);
                }
                None => tracing::debug!(%id, "ignoring thumbnail of a removed attachment"),
            },
            Err(err) => {
                tracing::debug!(%id, error = %err, "no thumbnail available");
                let failed = matches!(
                    err,
                    ThumbnailError::IoError(_) | ThumbnailError::DecodingFailed(_)
                );
                if failed && self.collection.contains(id) {
                    self.thumbnail_failures.insert(id, err);
                }
            }
        }
    }

    fn request_thumbnails(&self, ids: &[AttachmentId]) -> Task<Message> {
        let max_edge = self.config.rail_thumbnail_px;
        Task::batch(ids.iter().filter_map(|id| {
            let id = *id;
            let attachment = self.collection.get(id)?.attachment().clone();
            Some(Task::perform(thumbnail::load(attachment, max_edge), move |result| {
                Message::ThumbnailLoaded(id, result)
            }))
        }))
    }

    fn handle_page_message(&mut self, id: AttachmentId, msg: page::Message) -> Effect {
        let Some(target) = self.pages.get_mut(id) else {
            tracing::debug!(%id, "message for a discarded page");
            return Effect::None;
        };
        // Paused and scrubbing time must not count as elapsed playback.
        if matches!(msg, page::Message::Playback(_)) {
            self.last_tick = None;
        }
        match target.handle(msg) {
            page::Effect::None => Effect::None,
            page::Effect::CaptionChanged(text) => {
                let Some(item) = self.collection.get_mut(id) else {
                    return Effect::None;
                };
                item.set_caption(text);
                Effect::CaptionChanged {
                    id,
                    caption: item.caption().map(str::to_string),
                }
            }
            page::Effect::PlaybackCompleted => Effect::PlaybackCompleted { id },
        }
    }

    fn handle_toolbar_message(&mut self, msg: toolbar::Message) -> Effect {
        match self.toolbar.handle(msg) {
            toolbar::Effect::None => Effect::None,
            toolbar::Effect::Send => Effect::Approved {
                attachments: self.outcome_attachments(),
                message_text: self.toolbar.message_text().to_string(),
            },
            toolbar::Effect::Cancel => Effect::Cancelled {
                attachments: self.outcome_attachments(),
            },
            toolbar::Effect::AddMore => {
                if self.presentation_mode().allows_add_more() {
                    Effect::AddMoreRequested
                } else {
                    tracing::debug!("add more is not offered in modal presentation");
                    Effect::None
                }
            }
        }
    }

    fn outcome_attachments(&self) -> Vec<Attachment> {
        self.collection
            .clone()
            .into_attachments(self.config.max_caption_bytes)
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);

        let mut effect = Effect::None;
        for entry in self.pages.pages_mut() {
            if entry.tick(elapsed) == page::Effect::PlaybackCompleted {
                effect = Effect::PlaybackCompleted {
                    id: entry.item_id(),
                };
            }
        }
        if !self.is_playing() {
            self.last_tick = None;
        }
        effect
    }
}

/// View context for rendering the approval surface.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

impl State {
    fn rail_items(&self, i18n: &I18n) -> Vec<rail::RailItem> {
        let removable = self.can_remove();
        self.collection
            .items()
            .iter()
            .map(|item| rail::RailItem {
                id: item.id(),
                label: match self.thumbnail_failures.get(&item.id()) {
                    Some(err) => i18n.tr(err.i18n_key()),
                    None => item.attachment().file_name(),
                },
                thumbnail: self.thumbnails.get(&item.id()).cloned(),
                focused: item.id() == self.rail_focus,
                removable,
            })
            .collect()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'_>) -> Element<'a, Message> {
        let position = self.collection.position(self.current).map_or(0, |i| i + 1);
        let header = text(ctx.i18n.tr_with_args(
            "approval-position",
            &[
                ("current", position.to_string().as_str()),
                ("total", self.collection.len().to_string().as_str()),
            ],
        ))
        .size(typography::BODY)
        .color(ctx.colors.text_secondary);

        let nav_button = |label: &str, step: Step, enabled: bool| -> Button<'a, Message> {
            button(text(label.to_string()).size(typography::TITLE_MD))
                .on_press_maybe(enabled.then_some(Message::Navigate(step)))
                .width(Length::Fixed(sizing::PAGE_NAV_WIDTH))
                .style(styles::button::overlay)
        };
        let has_previous = self.collection.position(self.current).is_some_and(|i| i > 0);
        let has_next = self
            .collection
            .position(self.current)
            .is_some_and(|i| i + 1 < self.collection.len());

        let current = self.current;
        let page_view: Element<'a, Message> = match self.pages.get(current) {
            Some(current_page) => page::view(
                current_page,
                &page::ViewContext {
                    i18n: ctx.i18n,
                    colors: ctx.colors,
                    editing_scale_percent: self.config.editing_scale_percent,
                },
            )
            .map(move |msg| Message::Page(current, msg)),
            None => text(ctx.i18n.tr("page-missing")).into(),
        };

        let pager = row![
            nav_button("‹", Step::Previous, has_previous),
            container(page_view).width(Length::Fill).center_x(Length::Fill),
            nav_button("›", Step::Next, has_next),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .height(Length::Fill);

        let mut content: Column<'a, Message> = column![header, pager]
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .align_x(Alignment::Center);

        let rail_ctx = rail::ViewContext {
            i18n: ctx.i18n,
            cell_px: self.config.rail_thumbnail_px as f32,
        };
        if let Some(rail) = rail::view(self.rail_items(ctx.i18n), &rail_ctx) {
            content = content.push(rail.map(Message::Rail));
        }

        let toolbar_ctx = toolbar::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            show_add_more: self.presentation_mode().allows_add_more(),
        };
        content
            .push(toolbar::view(&self.toolbar, &toolbar_ctx).map(Message::Toolbar))
            .into()
    }
}
