// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the showcase: palette, spacing, sizing, typography.
//!
//! The palette mirrors the listing's warm earth tones: a cream page
//! background, brown text, and a darker brown for primary actions.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Page surfaces
    pub const CREAM: Color = Color::from_rgb(0.976, 0.969, 0.961); // #f9f7f5
    pub const SAND: Color = Color::from_rgb(0.910, 0.878, 0.847); // #e8e0d8

    // Brand browns
    pub const BROWN_900: Color = Color::from_rgb(0.306, 0.224, 0.137); // #4e3923
    pub const BROWN_700: Color = Color::from_rgb(0.365, 0.294, 0.208); // #5d4b35
    pub const BROWN_600: Color = Color::from_rgb(0.427, 0.337, 0.239); // #6d563d
    pub const BROWN_500: Color = Color::from_rgb(0.545, 0.431, 0.306); // #8b6e4e

    // Notification severities
    pub const SUCCESS_500: Color = Color::from_rgb(0.18, 0.60, 0.35);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.78);
    pub const WARNING_500: Color = Color::from_rgb(0.90, 0.58, 0.16);
    pub const ERROR_500: Color = Color::from_rgb(0.79, 0.25, 0.22);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Dim layer behind the lightbox.
    pub const OVERLAY_STRONG: f32 = 0.8;
    /// Caption bar at the bottom of the enlarged image.
    pub const OVERLAY_CAPTION: f32 = 0.5;
    /// Resting chrome buttons on top of the lightbox.
    pub const OVERLAY_SOFT: f32 = 0.1;
    /// Hovered chrome buttons.
    pub const OVERLAY_HOVER: f32 = 0.2;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the hero banner.
    pub const HERO_HEIGHT: f32 = 420.0;
    /// Reference tile width used to derive gallery tile heights.
    pub const GALLERY_TILE_WIDTH: f32 = 340.0;
    /// Width of a toast card.
    pub const TOAST_WIDTH: f32 = 360.0;
    /// Largest dimension of the enlarged lightbox image.
    pub const LIGHTBOX_MAX: f32 = 900.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const HERO_TITLE: f32 = 44.0;
    pub const SECTION_TITLE: f32 = 28.0;
    pub const CARD_TITLE: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 999.0;
}

/// Applies an alpha channel to a palette color.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn with_alpha_only_touches_alpha() {
        let color = with_alpha(palette::BROWN_500, 0.5);
        assert_eq!(color.r, palette::BROWN_500.r);
        assert!((color.a - 0.5).abs() < f32::EPSILON);
    }
}
