// SPDX-License-Identifier: MPL-2.0
//! Theme selection injected into the approval surface.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the approval surface reads at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub text_secondary: Color,
    pub warning: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_secondary: palette::GRAY_700,
            warning: palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_secondary: palette::GRAY_200,
            warning: palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
