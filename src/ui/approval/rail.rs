// SPDX-License-Identifier: MPL-2.0
//! Horizontal strip of attachment thumbnails for quick navigation.
//!
//! The rail only renders; it reports taps and removal requests as messages
//! and never changes the current item itself.

use crate::attachment::AttachmentId;
use crate::config::RAIL_MIN_ITEMS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, scrollable, text, Row};
use iced::{Alignment, Element, Length};

/// Everything the rail needs to draw one cell.
#[derive(Debug, Clone)]
pub struct RailItem {
    pub id: AttachmentId,
    /// Shown when no thumbnail is available.
    pub label: String,
    pub thumbnail: Option<image::Handle>,
    pub focused: bool,
    /// Whether the per-cell remove affordance is attached.
    pub removable: bool,
}

/// Messages emitted by the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Tapped(AttachmentId),
    RemoveRequested(AttachmentId),
}

/// The rail is only shown when there is something to choose between.
#[must_use]
pub fn is_visible(item_count: usize) -> bool {
    item_count >= RAIL_MIN_ITEMS
}

/// Whether removal may be offered for a collection of `item_count` items.
#[must_use]
pub fn allows_removal(item_count: usize) -> bool {
    item_count >= RAIL_MIN_ITEMS
}

/// View context for rendering the rail.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Edge length of a thumbnail cell.
    pub cell_px: f32,
}

fn cell<'a>(item: RailItem, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let cell_size = Length::Fixed(ctx.cell_px);
    let content: Element<'a, Message> = match item.thumbnail {
        Some(handle) => image(handle).width(cell_size).height(cell_size).into(),
        None => container(text(item.label).size(typography::CAPTION))
            .width(cell_size)
            .height(cell_size)
            .center_x(cell_size)
            .center_y(cell_size)
            .into(),
    };

    let style = if item.focused {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    let thumb = button(content)
        .on_press(Message::Tapped(item.id))
        .padding(spacing::XXS)
        .style(style);

    let mut cell = column![thumb]
        .spacing(spacing::XXS)
        .align_x(Alignment::Center);
    if item.removable {
        cell = cell.push(
            button(text(ctx.i18n.tr("rail-remove-button")).size(typography::CAPTION))
                .on_press(Message::RemoveRequested(item.id))
                .padding(spacing::XXS)
                .style(styles::button::overlay),
        );
    }
    cell.into()
}

/// Renders the rail, or `None` when fewer than two items remain.
pub fn view<'a>(items: Vec<RailItem>, ctx: &ViewContext<'_>) -> Option<Element<'a, Message>> {
    if !is_visible(items.len()) {
        return None;
    }

    let cells = Row::with_children(items.into_iter().map(|item| cell(item, ctx)))
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Alignment::Center);

    let strip = scrollable(cells)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill);

    Some(
        container(strip)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into(),
    )
}
