// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, with_alpha};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White section background (details, contact).
pub fn section(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        ..container::Style::default()
    }
}

/// Cream card with a sand border, used for detail cards and the form panel.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CREAM)),
        border: Border {
            color: palette::SAND,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Sticky-looking top bar above the page.
pub fn top_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CREAM)),
        border: Border {
            color: palette::SAND,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dark footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BROWN_700)),
        text_color: Some(with_alpha(palette::WHITE, 0.8)),
        ..container::Style::default()
    }
}

/// Darkening layer over the hero image so its caption stays readable.
pub fn hero_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(palette::BLACK, 0.4))),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Dim layer behind the enlarged image.
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            palette::BLACK,
            opacity::OVERLAY_STRONG,
        ))),
        ..container::Style::default()
    }
}

/// Caption bar at the bottom of the enlarged image.
pub fn lightbox_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            palette::BLACK,
            opacity::OVERLAY_CAPTION,
        ))),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Placeholder tile shown while an image is still being fetched.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SAND)),
        text_color: Some(palette::BROWN_700),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Toast card with a severity-colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::BROWN_700),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}
