// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading user
//! preferences from a `settings.toml` file, and writing one for hosts and
//! tests that provision settings.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[caption]` - Byte ceilings for captions and message text
//! - `[display]` - Presentation mode, rail sizing, caption editing scale
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ATTACHMENT_APPROVAL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use attachment_approval::config::{self, Config};
//!
//! let dir = std::path::PathBuf::from("/tmp/attachment_approval");
//! let (mut config, _warning) = config::load_with_override(Some(dir.clone()));
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, Some(dir)).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How the approval flow is presented by the host.
///
/// Only the shared-navigation presentation offers the "add more
/// attachments" affordance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationMode {
    #[default]
    Modal,
    SharedNavigation,
}

impl PresentationMode {
    #[must_use]
    pub fn allows_add_more(self) -> bool {
        matches!(self, PresentationMode::SharedNavigation)
    }
}

impl std::str::FromStr for PresentationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modal" => Ok(PresentationMode::Modal),
            "shared-navigation" | "shared" => Ok(PresentationMode::SharedNavigation),
            other => Err(format!("invalid presentation mode: {}", other)),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Text limits for captions and the compose toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptionConfig {
    /// Maximum UTF-8 byte length of a per-attachment caption.
    #[serde(default = "default_text_limit", skip_serializing_if = "Option::is_none")]
    pub max_caption_bytes: Option<usize>,

    /// Maximum UTF-8 byte length of the message text.
    #[serde(default = "default_text_limit", skip_serializing_if = "Option::is_none")]
    pub max_message_bytes: Option<usize>,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_caption_bytes: default_text_limit(),
            max_message_bytes: default_text_limit(),
        }
    }
}

/// Display settings for the approval surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_mode: Option<PresentationMode>,

    /// Page scale while a caption is being edited (percent).
    #[serde(
        default = "default_editing_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub editing_scale_percent: Option<f32>,

    /// Edge length of rail thumbnails in logical pixels.
    #[serde(
        default = "default_rail_thumbnail_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub rail_thumbnail_px: Option<u32>,

    /// Interval between playback progress ticks in milliseconds.
    #[serde(
        default = "default_playback_tick_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub playback_tick_ms: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            presentation_mode: Some(PresentationMode::default()),
            editing_scale_percent: default_editing_scale(),
            rail_thumbnail_px: default_rail_thumbnail_px(),
            playback_tick_ms: default_playback_tick_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub caption: CaptionConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Caption ceiling, clamped to the accepted range.
    #[must_use]
    pub fn max_caption_bytes(&self) -> usize {
        clamp_text_limit(self.caption.max_caption_bytes)
    }

    /// Message text ceiling, clamped to the accepted range.
    #[must_use]
    pub fn max_message_bytes(&self) -> usize {
        clamp_text_limit(self.caption.max_message_bytes)
    }

    #[must_use]
    pub fn presentation_mode(&self) -> PresentationMode {
        self.display.presentation_mode.unwrap_or_default()
    }

    #[must_use]
    pub fn editing_scale_percent(&self) -> f32 {
        self.display
            .editing_scale_percent
            .unwrap_or(DEFAULT_EDITING_SCALE_PERCENT)
            .clamp(MIN_EDITING_SCALE_PERCENT, MAX_EDITING_SCALE_PERCENT)
    }

    #[must_use]
    pub fn rail_thumbnail_px(&self) -> u32 {
        self.display
            .rail_thumbnail_px
            .unwrap_or(DEFAULT_RAIL_THUMBNAIL_PX)
            .clamp(MIN_RAIL_THUMBNAIL_PX, MAX_RAIL_THUMBNAIL_PX)
    }

    #[must_use]
    pub fn playback_tick_ms(&self) -> u64 {
        self.display
            .playback_tick_ms
            .unwrap_or(DEFAULT_PLAYBACK_TICK_MS)
            .clamp(MIN_PLAYBACK_TICK_MS, MAX_PLAYBACK_TICK_MS)
    }
}

fn clamp_text_limit(value: Option<usize>) -> usize {
    value
        .unwrap_or(DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES)
        .clamp(MIN_TEXT_LIMIT_BYTES, MAX_TEXT_LIMIT_BYTES)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_text_limit() -> Option<usize> {
    Some(DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES)
}

fn default_editing_scale() -> Option<f32> {
    Some(DEFAULT_EDITING_SCALE_PERCENT)
}

fn default_rail_thumbnail_px() -> Option<u32> {
    Some(DEFAULT_RAIL_THUMBNAIL_PX)
}

fn default_playback_tick_ms() -> Option<u64> {
    Some(DEFAULT_PLAYBACK_TICK_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            caption: CaptionConfig {
                max_caption_bytes: Some(512),
                max_message_bytes: Some(4096),
            },
            display: DisplayConfig {
                presentation_mode: Some(PresentationMode::SharedNavigation),
                editing_scale_percent: Some(60.0),
                rail_thumbnail_px: Some(48),
                playback_tick_ms: Some(100),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.caption, CaptionConfig::default());
        assert_eq!(loaded.presentation_mode(), PresentationMode::Modal);
    }

    #[test]
    fn text_limits_are_clamped() {
        let mut config = Config::default();
        config.caption.max_caption_bytes = Some(1);
        config.caption.max_message_bytes = Some(usize::MAX);

        assert_eq!(config.max_caption_bytes(), MIN_TEXT_LIMIT_BYTES);
        assert_eq!(config.max_message_bytes(), MAX_TEXT_LIMIT_BYTES);
    }

    #[test]
    fn default_config_uses_oversize_threshold() {
        let config = Config::default();
        assert_eq!(
            config.max_caption_bytes(),
            DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES
        );
        assert_eq!(
            config.max_message_bytes(),
            DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES
        );
        assert_eq!(config.rail_thumbnail_px(), DEFAULT_RAIL_THUMBNAIL_PX);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("cfg");
        let mut config = Config::default();
        config.display.presentation_mode = Some(PresentationMode::SharedNavigation);

        save_with_override(&config, Some(base.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.presentation_mode(), PresentationMode::SharedNavigation);
    }

    #[test]
    fn presentation_mode_parses_cli_spellings() {
        assert_eq!(
            "modal".parse::<PresentationMode>(),
            Ok(PresentationMode::Modal)
        );
        assert_eq!(
            "Shared".parse::<PresentationMode>(),
            Ok(PresentationMode::SharedNavigation)
        );
        assert!("sideways".parse::<PresentationMode>().is_err());
        assert!(PresentationMode::SharedNavigation.allows_add_more());
        assert!(!PresentationMode::Modal.allows_add_more());
    }
}
