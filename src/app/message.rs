// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::PresentationMode;
use crate::ui::approval;
use iced::time::Instant;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Approval(approval::Message),
    /// Periodic tick driving video progress.
    Tick(Instant),
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. "fr").
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Presentation mode override; falls back to `[display]` in the settings.
    pub mode: Option<PresentationMode>,
    /// Files to review, in display order.
    pub files: Vec<PathBuf>,
}
