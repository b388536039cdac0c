// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for a video attachment, kept in sync with the
//! progress slider.
//!
//! State transitions:
//! - Stopped: initial state, and after playback reaches the end
//! - Playing: position advances on every progress tick
//! - Paused: position frozen, play affordance shown
//!
//! Scrubbing always pauses first, so playback and scrubbing never run at the
//! same time. Positions are in seconds and clamped to `[0, duration]`.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, row, slider, text};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Playback controller state for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    status: Status,
    position_secs: f64,
    duration_secs: f64,
    /// While the slider is held: whether playback should resume on release.
    scrub_resume: Option<bool>,
}

/// Messages from the play button and the progress slider.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    /// Slider moved. The first move of a drag starts scrubbing.
    Scrub(f64),
    /// Slider released.
    ScrubReleased,
}

/// Effects produced by playback changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Playback reached the end of the media.
    Completed,
}

impl State {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            status: Status::Stopped,
            position_secs: 0.0,
            duration_secs: duration.as_secs_f64(),
            scrub_resume: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrub_resume.is_some()
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// The play affordance is hidden only while playing.
    pub fn shows_play_affordance(&self) -> bool {
        !self.is_playing()
    }

    fn clamp(&self, secs: f64) -> f64 {
        secs.max(0.0).min(self.duration_secs)
    }

    fn at_end(&self) -> bool {
        self.position_secs >= self.duration_secs
    }

    /// Starts playback from the current position. No-op while playing.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        if self.at_end() {
            self.position_secs = 0.0;
        }
        self.status = Status::Playing;
    }

    /// Pauses playback. No-op unless playing.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.status = Status::Paused;
        }
    }

    /// Returns to the initial state.
    pub fn stop(&mut self) {
        self.status = Status::Stopped;
        self.position_secs = 0.0;
        self.scrub_resume = None;
    }

    /// Enters scrubbing. Always ends in `Paused`; returns whether playback
    /// was running before.
    pub fn scrub_start(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.status = Status::Paused;
        was_playing
    }

    /// Seeks without changing the play/pause state.
    pub fn scrub_to(&mut self, secs: f64) {
        self.position_secs = self.clamp(secs);
    }

    /// Seeks and optionally resumes playback from the target. Unlike
    /// [`Self::play`], releasing at the end does not rewind; the next tick
    /// completes the media.
    pub fn scrub_end(&mut self, secs: f64, resume: bool) {
        self.scrub_to(secs);
        if resume {
            self.status = Status::Playing;
        }
    }

    /// Progress observer tick. Moves the position while playing and stops at
    /// the end of the media.
    pub fn advance(&mut self, elapsed: Duration) -> Effect {
        if !self.is_playing() {
            return Effect::None;
        }
        self.position_secs = self.clamp(self.position_secs + elapsed.as_secs_f64());
        if self.at_end() {
            self.status = Status::Stopped;
            Effect::Completed
        } else {
            Effect::None
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TogglePlayback => {
                if self.is_playing() {
                    self.pause();
                } else {
                    self.play();
                }
            }
            Message::Scrub(secs) => {
                if self.scrub_resume.is_none() {
                    self.scrub_resume = Some(self.scrub_start());
                }
                self.scrub_to(secs);
            }
            Message::ScrubReleased => {
                if let Some(resume) = self.scrub_resume.take() {
                    self.scrub_end(self.position_secs, resume);
                }
            }
        }
        Effect::None
    }
}

/// Renders the play/pause button, progress slider and time display.
pub fn view<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let label = if state.shows_play_affordance() {
        i18n.tr("playback-play-button")
    } else {
        i18n.tr("playback-pause-button")
    };
    let toggle = button(text(label).size(typography::BODY))
        .on_press(Message::TogglePlayback)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::overlay);

    let timeline = slider(
        0.0..=state.duration_secs,
        state.position_secs,
        Message::Scrub,
    )
    .on_release(Message::ScrubReleased)
    .step(SLIDER_STEP_SECS)
    .width(Length::Fill);

    let time_display = text(format!(
        "{} / {}",
        format_time(state.position_secs),
        format_time(state.duration_secs)
    ))
    .size(typography::CAPTION);

    row![toggle, timeline, time_display]
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .into()
}

fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
