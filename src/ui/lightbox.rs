// SPDX-License-Identifier: MPL-2.0
//! Lightbox chrome: the enlarged image with close and navigation controls.
//!
//! Only the chrome lives here; the dim backdrop, input capture, and the
//! decision of *which* image is enlarged belong to the page shell and the
//! gallery viewer respectively.

use crate::catalog::Image;
use crate::gallery::Direction;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the lightbox controls.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Navigate(Direction),
}

/// Renders the enlarged image with its chrome.
///
/// `handle` is `None` while the image bytes are still being fetched; a
/// placeholder with the caption is shown instead.
pub fn view<'a>(entry: &'a Image, handle: Option<&Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::LIGHTBOX_MAX))
            .height(Length::Fixed(
                entry.aspect_ratio.height_for_width(sizing::LIGHTBOX_MAX),
            ))
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(Text::new(entry.alt_text.as_str()).size(typography::BODY))
            .width(Length::Fixed(sizing::LIGHTBOX_MAX))
            .height(Length::Fixed(sizing::LIGHTBOX_MAX * 0.6))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    let caption = Container::new(Text::new(entry.alt_text.as_str()).size(typography::BODY))
        .width(Length::Fixed(sizing::LIGHTBOX_MAX))
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::lightbox_caption);

    let close_button = chrome_button("✕", Message::Close);
    let previous_button = chrome_button("‹", Message::Navigate(Direction::Previous));
    let next_button = chrome_button("›", Message::Navigate(Direction::Next));

    let top_row = Row::new()
        .width(Length::Fixed(sizing::LIGHTBOX_MAX))
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(close_button);

    let middle_row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(previous_button)
        .push(Column::new().push(picture).push(caption))
        .push(next_button);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(top_row)
        .push(middle_row)
        .into()
}

fn chrome_button(label: &str, message: Message) -> Element<'_, Message> {
    button(
        Text::new(label)
            .size(typography::SECTION_TITLE)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::overlay(palette::WHITE))
    .into()
}
