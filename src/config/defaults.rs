// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Text limits**: Byte ceilings for captions and message text
//! - **Zoom**: Page zoom bounds and the scale applied while editing a caption
//! - **Rail**: Thumbnail strip sizing
//! - **Playback**: Progress tick interval

// ==========================================================================
// Text Limit Defaults
// ==========================================================================

/// Byte length above which a text body is considered oversize by the
/// message protocol. Used as the default ceiling for captions and message text.
pub const DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES: usize = 2 * 1024;

/// Smallest ceiling accepted from the settings file.
pub const MIN_TEXT_LIMIT_BYTES: usize = 16;

/// Largest ceiling accepted from the settings file.
pub const MAX_TEXT_LIMIT_BYTES: usize = 64 * 1024;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom level a page returns to when it is left (100% = fit).
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Minimum allowed zoom percentage.
pub const MIN_ZOOM_PERCENT: f32 = 10.0;

/// Maximum allowed zoom percentage.
pub const MAX_ZOOM_PERCENT: f32 = 800.0;

/// Default zoom step for zoom in/out operations.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 10.0;

/// Scale applied to the page media while its caption is being edited.
pub const DEFAULT_EDITING_SCALE_PERCENT: f32 = 75.0;

/// Minimum editing scale.
pub const MIN_EDITING_SCALE_PERCENT: f32 = 25.0;

/// Maximum editing scale (100% = no scale-down).
pub const MAX_EDITING_SCALE_PERCENT: f32 = 100.0;

// ==========================================================================
// Rail Defaults
// ==========================================================================

/// Edge length of a rail thumbnail cell in logical pixels.
pub const DEFAULT_RAIL_THUMBNAIL_PX: u32 = 64;

/// Minimum rail thumbnail edge.
pub const MIN_RAIL_THUMBNAIL_PX: u32 = 32;

/// Maximum rail thumbnail edge.
pub const MAX_RAIL_THUMBNAIL_PX: u32 = 256;

/// The rail is only shown when at least this many items remain.
pub const RAIL_MIN_ITEMS: usize = 2;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Interval between playback progress ticks in milliseconds.
pub const DEFAULT_PLAYBACK_TICK_MS: u64 = 50;

/// Minimum playback tick interval.
pub const MIN_PLAYBACK_TICK_MS: u64 = 10;

/// Maximum playback tick interval.
pub const MAX_PLAYBACK_TICK_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TEXT_LIMIT_BYTES > 0);
    assert!(DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES >= MIN_TEXT_LIMIT_BYTES);
    assert!(DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES <= MAX_TEXT_LIMIT_BYTES);

    assert!(MIN_ZOOM_PERCENT > 0.0);
    assert!(MIN_ZOOM_PERCENT < DEFAULT_ZOOM_PERCENT);
    assert!(MAX_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);
    assert!(DEFAULT_EDITING_SCALE_PERCENT >= MIN_EDITING_SCALE_PERCENT);
    assert!(DEFAULT_EDITING_SCALE_PERCENT <= MAX_EDITING_SCALE_PERCENT);

    assert!(MIN_RAIL_THUMBNAIL_PX > 0);
    assert!(DEFAULT_RAIL_THUMBNAIL_PX >= MIN_RAIL_THUMBNAIL_PX);
    assert!(DEFAULT_RAIL_THUMBNAIL_PX <= MAX_RAIL_THUMBNAIL_PX);
    assert!(RAIL_MIN_ITEMS >= 2);

    assert!(MIN_PLAYBACK_TICK_MS > 0);
    assert!(DEFAULT_PLAYBACK_TICK_MS >= MIN_PLAYBACK_TICK_MS);
    assert!(DEFAULT_PLAYBACK_TICK_MS <= MAX_PLAYBACK_TICK_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversize_threshold_is_two_kib() {
        assert_eq!(DEFAULT_OVERSIZE_TEXT_THRESHOLD_BYTES, 2048);
    }

    #[test]
    fn editing_scale_shrinks_the_page() {
        assert!(DEFAULT_EDITING_SCALE_PERCENT < DEFAULT_ZOOM_PERCENT);
    }

    #[test]
    fn rail_thumbnail_defaults_are_valid() {
        assert!(DEFAULT_RAIL_THUMBNAIL_PX >= MIN_RAIL_THUMBNAIL_PX);
        assert!(DEFAULT_RAIL_THUMBNAIL_PX <= MAX_RAIL_THUMBNAIL_PX);
    }
}
