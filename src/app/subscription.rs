// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys page between attachments unless a text input consumed them.
//! The playback tick only runs while a video is playing.

use super::Message;
use crate::ui::approval;
use crate::ui::approval::navigation::Step;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        let step = match key {
            Key::Named(Named::ArrowLeft) => Step::Previous,
            Key::Named(Named::ArrowRight) => Step::Next,
            _ => return None,
        };
        Some(Message::Approval(approval::Message::Navigate(step)))
    })
}

/// Progress ticks at `interval_ms`, or nothing when no video plays.
pub fn create_tick_subscription(is_playing: bool, interval_ms: u64) -> Subscription<Message> {
    if is_playing {
        time::every(Duration::from_millis(interval_ms)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
