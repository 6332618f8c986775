// SPDX-License-Identifier: MPL-2.0
//! The property details section: one card per group of facts.

use crate::listing::DetailCard;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the "Detalles de la Propiedad" section.
///
/// Static content: the section emits no messages of its own.
pub fn view<'a, Message: 'a>(cards: &'a [DetailCard]) -> Element<'a, Message> {
    let title = Text::new("Detalles de la Propiedad")
        .size(typography::SECTION_TITLE)
        .style(|_theme| iced::widget::text::Style {
            color: Some(palette::BROWN_700),
        });

    let mut row = Row::new().spacing(spacing::LG);
    for card in cards {
        row = row.push(card_view(card));
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(row);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section)
        .into()
}

fn card_view<'a, Message: 'a>(card: &'a DetailCard) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::MD).push(
        Text::new(card.title.as_str())
            .size(typography::CARD_TITLE)
            .style(|_theme| iced::widget::text::Style {
                color: Some(palette::BROWN_700),
            }),
    );

    for item in &card.items {
        content = content.push(
            Row::new()
                .push(
                    Container::new(Text::new(item.label.as_str()).size(typography::BODY))
                        .width(Length::Fill),
                )
                .push(
                    Text::new(item.value.as_str())
                        .size(typography::BODY)
                        .style(|_theme| iced::widget::text::Style {
                            color: Some(palette::BROWN_500),
                        }),
                ),
        );
    }

    for highlight in &card.highlights {
        content = content.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new("→").size(typography::BODY).style(|_theme| {
                    iced::widget::text::Style {
                        color: Some(palette::BROWN_500),
                    }
                }))
                .push(Text::new(highlight.as_str()).size(typography::BODY)),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
