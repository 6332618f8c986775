// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, with_alpha,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action button (submit, schedule a visit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BROWN_600,
        button::Status::Disabled => palette::SAND,
        _ => palette::BROWN_500,
    };
    let text_color = match status {
        button::Status::Disabled => palette::BROWN_600,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless tile wrapping a gallery thumbnail.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered => Border {
            color: palette::BROWN_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
    };

    button::Style {
        background: None,
        text_color: palette::BROWN_700,
        border,
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Navigation link in the top bar; the active section is tinted.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette::BROWN_500
        } else {
            palette::BROWN_700
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Translucent chrome buttons floating over the lightbox (close, chevrons).
pub fn overlay(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
            _ => opacity::OVERLAY_SOFT,
        };

        button::Style {
            background: Some(Background::Color(with_alpha(BLACK, alpha))),
            text_color,
            border: Border {
                radius: radius::PILL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
