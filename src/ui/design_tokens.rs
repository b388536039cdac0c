// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the approval surface.
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Opacity**: Transparency levels
//! - **Radius**: Corner rounding
//! - **Shadow**: Elevation shadows
//! - **Typography**: Font size scale

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Width of the page-level previous/next buttons.
    pub const PAGE_NAV_WIDTH: f32 = 48.0;
    /// Width of an image preview at 100% zoom.
    pub const PAGE_PREVIEW_WIDTH: f32 = 480.0;
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

pub mod typography {
    /// Large title - file names on non-previewable pages
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, byte counters, small info
    pub const CAPTION: f32 = 12.0;
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(opacity::OVERLAY_HOVER > opacity::OVERLAY_MEDIUM);
    assert!(radius::LG > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }
}
