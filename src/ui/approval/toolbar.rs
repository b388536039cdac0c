// SPDX-License-Identifier: MPL-2.0
//! Compose toolbar: message text plus the send, cancel and add-more actions.

use super::caption;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, row, text, Button};
use iced::{Alignment, Element, Length};

/// Toolbar state: the message composer.
#[derive(Debug, Clone)]
pub struct State {
    composer: caption::State,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Composer(caption::Message),
    Send,
    Cancel,
    AddMore,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Send,
    Cancel,
    AddMore,
}

impl State {
    #[must_use]
    pub fn new(max_message_bytes: usize) -> Self {
        Self {
            composer: caption::State::new(None, max_message_bytes),
        }
    }

    pub fn message_text(&self) -> &str {
        self.composer.text()
    }

    pub fn composer(&self) -> &caption::State {
        &self.composer
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            // Enter in the composer sends.
            Message::Composer(caption::Message::Submitted) => Effect::Send,
            Message::Composer(msg) => match self.composer.handle(msg) {
                caption::Effect::FinishedEditing { .. } => Effect::Send,
                caption::Effect::None | caption::Effect::Changed(_) => Effect::None,
            },
            Message::Send => Effect::Send,
            Message::Cancel => Effect::Cancel,
            Message::AddMore => Effect::AddMore,
        }
    }
}

/// View context for rendering the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Whether the add-more action is offered.
    pub show_add_more: bool,
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr("composer-placeholder");
    let composer = caption::view(&state.composer, &placeholder, ctx.i18n, ctx.colors)
        .map(Message::Composer);

    let action = |label: String, msg: Message| -> Button<'a, Message> {
        button(text(label))
            .on_press(msg)
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    };

    let mut bar = row![action(ctx.i18n.tr("approval-cancel-button"), Message::Cancel)]
        .spacing(spacing::XS)
        .align_y(Alignment::Center);
    if ctx.show_add_more {
        bar = bar.push(action(ctx.i18n.tr("approval-add-more-button"), Message::AddMore));
    }
    let send = action(ctx.i18n.tr("approval-send-button"), Message::Send)
        .style(styles::button::primary);
    bar = bar.push(composer).push(send);

    container(bar)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
