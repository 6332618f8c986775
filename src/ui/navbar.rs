// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with section links.
//!
//! The bar shows the listing title, one link per page section, and the
//! "Agendar Visita" shortcut. The link matching the visitor's scroll
//! position is highlighted, mirroring how the page tracks the section
//! currently in view.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// The three page sections reachable from the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Detalles,
    Galeria,
    Contacto,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 3] = [Section::Detalles, Section::Galeria, Section::Contacto];

    /// Link label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Section::Detalles => "Detalles",
            Section::Galeria => "Galería",
            Section::Contacto => "Contacto",
        }
    }

    /// Scroll target for this section, as a fraction of the page.
    #[must_use]
    pub fn anchor(&self) -> RelativeOffset {
        let y = match self {
            Section::Detalles => 0.0,
            Section::Galeria => 0.45,
            Section::Contacto => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }

    /// The section considered "in view" at a given scroll fraction.
    #[must_use]
    pub fn at_offset(y: f32) -> Section {
        if y < 0.3 {
            Section::Detalles
        } else if y < 0.75 {
            Section::Galeria
        } else {
            Section::Contacto
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Go(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Go(section) => Event::ScrollTo(section),
    }
}

/// Render the navigation bar.
pub fn view<'a>(title: &'a str, active: Section) -> Element<'a, Message> {
    let brand = Text::new(title)
        .size(typography::CARD_TITLE)
        .style(|_theme| iced::widget::text::Style {
            color: Some(crate::ui::design_tokens::palette::BROWN_700),
        });

    let mut links = Row::new().spacing(spacing::LG);
    for section in Section::ALL {
        links = links.push(
            button(Text::new(section.label()).size(typography::BODY))
                .on_press(Message::Go(section))
                .padding(spacing::XS)
                .style(styles::button::nav_link(active == section)),
        );
    }

    let visit_button = button(Text::new("Agendar Visita").size(typography::BODY))
        .on_press(Message::Go(Section::Contacto))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XL)
        .padding([spacing::SM, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(links)
        .push(visit_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::top_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_ordered_down_the_page() {
        assert!(Section::Detalles.anchor().y < Section::Galeria.anchor().y);
        assert!(Section::Galeria.anchor().y < Section::Contacto.anchor().y);
    }

    #[test]
    fn offsets_resolve_to_sections_in_page_order() {
        assert_eq!(Section::at_offset(0.0), Section::Detalles);
        assert_eq!(Section::at_offset(0.5), Section::Galeria);
        assert_eq!(Section::at_offset(1.0), Section::Contacto);
    }

    #[test]
    fn every_anchor_resolves_back_to_its_own_section() {
        for section in Section::ALL {
            assert_eq!(Section::at_offset(section.anchor().y), section);
        }
    }

    #[test]
    fn go_message_becomes_scroll_event() {
        let Event::ScrollTo(section) = update(Message::Go(Section::Galeria));
        assert_eq!(section, Section::Galeria);
    }
}
