// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections underneath the top bar.
//! While the scroll lock is held, the lightbox layer sits on top of the
//! page and swallows every event aimed at it; toasts render above both.

use super::{page_scroll_id, App, Message};
use crate::ui::design_tokens::{palette, sizing, spacing, typography, with_alpha};
use crate::ui::details;
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{center, mouse_area, opaque, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let navbar_view =
            navbar::view(&self.listing.title, self.active_section).map(Message::Navbar);

        let sections = Column::new()
            .push(self.hero())
            .push(details::view(&self.listing.cards))
            .push(gallery_grid::view(self.gallery.catalog(), &self.images).map(Message::Gallery))
            .push(self.contact.view(&self.config.contact).map(Message::Contact))
            .push(self.footer());

        let page = Column::new().push(navbar_view).push(
            scrollable(sections)
                .id(page_scroll_id())
                .on_scroll(|viewport| Message::PageScrolled(viewport.relative_offset()))
                .width(Length::Fill)
                .height(Length::Fill),
        );

        let mut layers: Vec<Element<'_, Message>> = vec![page.into()];

        if self.scroll_lock.is_locked() {
            if let Some(overlay) = self.lightbox_layer() {
                layers.push(overlay);
            }
        }

        layers.push(Toast::view_overlay(&self.notifications).map(Message::Notification));

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn hero(&self) -> Element<'_, Message> {
        let picture: Element<'_, Message> = match self
            .listing
            .hero_image()
            .and_then(|id| self.images.get(&id))
        {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::HERO_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            None => Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::HERO_HEIGHT))
                .style(styles::container::placeholder)
                .into(),
        };

        let title = Text::new(self.listing.title.as_str())
            .size(typography::HERO_TITLE)
            .style(|_theme| iced::widget::text::Style {
                color: Some(palette::WHITE),
            });
        let tagline = Text::new(self.listing.tagline.as_str())
            .size(typography::CARD_TITLE)
            .style(|_theme| iced::widget::text::Style {
                color: Some(with_alpha(palette::WHITE, 0.9)),
            });

        let caption = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(title)
                .push(tagline),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(spacing::XL)
        .align_y(alignment::Vertical::Bottom)
        .style(styles::container::hero_overlay);

        Stack::with_children([picture, caption.into()])
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        let year = chrono::Utc::now().year();
        let row = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(self.listing.title.as_str()).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(
                Text::new(format!(
                    "© {} {}. Todos los derechos reservados.",
                    year, self.listing.title
                ))
                .size(typography::CAPTION),
            );

        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::LG, spacing::LG])
            .style(styles::container::footer)
            .into()
    }

    /// The lightbox layer: dim backdrop, enlarged image, chrome.
    ///
    /// Clicking the backdrop closes the lightbox; clicks on the image and
    /// its chrome stay inside. The outer `opaque` is what keeps the page
    /// beneath from receiving (and scrolling on) any event.
    fn lightbox_layer(&self) -> Option<Element<'_, Message>> {
        let id = self.gallery.selection()?;
        let entry = self.gallery.catalog().get(id)?;
        let chrome = lightbox::view(entry, self.images.get(&id)).map(Message::Lightbox);

        let backdrop = center(opaque(chrome))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::lightbox_backdrop);

        Some(opaque(
            mouse_area(backdrop).on_press(Message::Lightbox(lightbox::Message::Close)),
        ))
    }
}
