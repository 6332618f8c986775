// SPDX-License-Identifier: MPL-2.0
//! The gallery section: a masonry-style grid of image tiles.
//!
//! Tiles are distributed round-robin over three columns; each tile's
//! height follows its image's aspect ratio so columns stagger naturally.
//! Clicking a tile asks the viewer to open that image.

use crate::catalog::{AspectRatio, Catalog, ImageId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

const COLUMNS: usize = 3;

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A tile was clicked.
    Open(ImageId),
}

/// Renders the "Galería de Imágenes" section.
pub fn view<'a>(catalog: &'a Catalog, handles: &'a HashMap<ImageId, Handle>) -> Element<'a, Message> {
    let title = Text::new("Galería de Imágenes")
        .size(typography::SECTION_TITLE)
        .style(|_theme| iced::widget::text::Style {
            color: Some(palette::BROWN_700),
        });

    let mut buckets: Vec<Vec<Element<'a, Message>>> = (0..COLUMNS).map(|_| Vec::new()).collect();
    for (index, entry) in catalog.iter().enumerate() {
        let tile = tile_view(entry.id, &entry.alt_text, entry.aspect_ratio, handles);
        buckets[index % COLUMNS].push(tile);
    }

    let grid = Row::with_children(buckets.into_iter().map(|tiles| {
        Column::with_children(tiles)
            .spacing(spacing::MD)
            .width(Length::Fill)
            .into()
    }))
    .spacing(spacing::MD)
    .width(Length::Fill);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .into()
}

fn tile_view<'a>(
    id: ImageId,
    alt_text: &'a str,
    aspect_ratio: AspectRatio,
    handles: &'a HashMap<ImageId, Handle>,
) -> Element<'a, Message> {
    let height = aspect_ratio.height_for_width(sizing::GALLERY_TILE_WIDTH);

    let content: Element<'a, Message> = match handles.get(&id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(alt_text).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    button(content)
        .on_press(Message::Open(id))
        .padding(0)
        .style(styles::button::tile)
        .into()
}
