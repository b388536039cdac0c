// SPDX-License-Identifier: MPL-2.0
//! Application root: a host window around the approval surface.
//!
//! The `App` loads settings and translations, builds the approval flow from
//! the files given on the command line, and acts on the flow's outcomes.
//! Sending is out of scope, so confirming or cancelling logs the final
//! attachment list and closes the window.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::approval;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{column, container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    approval: approval::State,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    playback_tick_ms: u64,
    /// i18n key of a settings warning shown above the flow.
    notice_key: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.approval.current())
            .field("items", &self.approval.collection().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns [`crate::error::Error::EmptyCollection`] when no file was given,
/// before any window is opened, and [`crate::error::Error::Gui`] when the
/// runtime fails.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let booted = App::new(flags, &config, config_warning)?;

    // iced 0.14 requires an Fn boot function; the state is handed out once.
    let boot_state = RefCell::new(Some(booted));
    let boot = move || {
        boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once")
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Builds the application state and the initial thumbnail requests.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Error::EmptyCollection`] when `flags`
    /// carries no file.
    pub fn new(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> Result<(Self, Task<Message>)> {
        let i18n = I18n::new(flags.lang, config);

        let mut approval_config = approval::ApprovalConfig::from_config(config);
        if let Some(mode) = flags.mode {
            approval_config = approval_config.with_presentation_mode(mode);
        }

        let attachments = flags
            .files
            .into_iter()
            .map(crate::attachment::Attachment::from_path)
            .collect();
        let (approval, task) = approval::State::new(attachments, approval_config)?;

        let theme_mode = config.general.theme_mode;
        let app = Self {
            i18n,
            approval,
            theme_mode,
            colors: theme_mode.colors(),
            playback_tick_ms: config.playback_tick_ms(),
            notice_key: config_warning,
        };
        Ok((app, task.map(Message::Approval)))
    }

    pub fn approval(&self) -> &approval::State {
        &self.approval
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.approval.current_item() {
            Some(item) => format!("{} - {}", item.attachment().file_name(), app_name),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.approval.is_playing(),
                self.playback_tick_ms,
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let approval_message = match message {
            Message::Approval(msg) => msg,
            Message::Tick(now) => approval::Message::Tick(now),
        };
        let (effect, task) = self.approval.handle_message(approval_message);
        let task = task.map(Message::Approval);

        match effect {
            approval::Effect::None => task,
            approval::Effect::Approved {
                attachments,
                message_text,
            } => {
                tracing::info!(count = attachments.len(), %message_text, "attachments approved");
                for attachment in &attachments {
                    tracing::info!(
                        path = %attachment.path().display(),
                        caption = attachment.caption().unwrap_or_default(),
                        "approved attachment"
                    );
                }
                iced::exit()
            }
            approval::Effect::Cancelled { attachments } => {
                tracing::info!(count = attachments.len(), "approval cancelled");
                iced::exit()
            }
            approval::Effect::CaptionChanged { id, caption } => {
                tracing::debug!(%id, ?caption, "caption changed");
                task
            }
            approval::Effect::AddMoreRequested => {
                tracing::info!("add more requested; this host has no attachment picker");
                task
            }
            approval::Effect::PlaybackCompleted { id } => {
                tracing::debug!(%id, "playback completed");
                task
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let flow = self
            .approval
            .view(approval::ViewContext {
                i18n: &self.i18n,
                colors: &self.colors,
            })
            .map(Message::Approval);

        let content = match &self.notice_key {
            Some(key) => column![
                text(self.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(self.colors.warning),
                flow
            ]
            .spacing(spacing::XS)
            .into(),
            None => flow,
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
