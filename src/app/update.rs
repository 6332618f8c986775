// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Gallery transitions drive the scroll lock, contact-form events
//! dispatch inquiries as background tasks, and every completed side
//! effect lands back here as a message carrying its own result.

use super::{page_scroll_id, App, Message};
use crate::inquiry::{self, Inquiry, MailRoute, Outcome};
use crate::mail::SmtpMailer;
use crate::ui::contact_form;
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use iced::widget::image::Handle;
use iced::widget::operation;
use iced::Task;
use std::sync::Arc;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                let navbar::Event::ScrollTo(section) = navbar::update(message);
                self.active_section = section;
                operation::snap_to(page_scroll_id(), section.anchor())
            }
            Message::PageScrolled(offset) => {
                self.active_section = navbar::Section::at_offset(offset.y);
                Task::none()
            }
            Message::Gallery(gallery_grid::Message::Open(id)) => {
                match self.gallery.open(id) {
                    Ok(()) => self.scroll_lock.acquire(),
                    // Tiles are built from the catalog, so this only fires
                    // on a programming error.
                    Err(err) => eprintln!("Failed to open image: {}", err),
                }
                Task::none()
            }
            Message::Lightbox(message) => {
                match message {
                    lightbox::Message::Close => {
                        self.gallery.close();
                        self.scroll_lock.release();
                    }
                    lightbox::Message::Navigate(direction) => {
                        // Navigating with nothing selected is a no-op.
                        let _ = self.gallery.navigate(direction);
                    }
                }
                Task::none()
            }
            Message::Contact(message) => match self.contact.update(message) {
                contact_form::Event::None => Task::none(),
                contact_form::Event::CopyWhatsApp => {
                    self.notifications.push(Notification::info(
                        "Enlace de WhatsApp copiado al portapapeles",
                    ));
                    iced::clipboard::write(self.config.contact.whatsapp_url())
                }
                contact_form::Event::Submit(inquiry) => self.dispatch_inquiry(inquiry),
            },
            Message::SubmitCompleted(outcome) => {
                self.contact.finish_submission();
                match outcome {
                    Outcome::Sent => {
                        self.contact.clear();
                        self.notifications
                            .push(Notification::success("Mensaje enviado con exito"));
                    }
                    Outcome::Failed => {
                        self.notifications.push(Notification::error(
                            "No se pudo enviar el mensaje. Intente de nuevo.",
                        ));
                    }
                }
                Task::none()
            }
            Message::ImageFetched { id, result } => {
                match result {
                    Ok(bytes) => {
                        self.images.insert(id, Handle::from_bytes(bytes));
                    }
                    Err(err) => eprintln!("Failed to fetch image {}: {}", id, err),
                }
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.update(message);
                Task::none()
            }
        }
    }

    /// Spawns one best-effort submission. The transport is assembled per
    /// call; a configuration failure resolves to `Failed` like any other
    /// delivery problem.
    fn dispatch_inquiry(&mut self, inquiry: Inquiry) -> Task<Message> {
        let route = MailRoute {
            sender: self.config.smtp.username.clone(),
            recipient: self.config.contact.recipient.clone(),
            subject: self.config.contact.subject.clone(),
        };

        match SmtpMailer::new(&self.config.smtp) {
            Ok(mailer) => Task::perform(
                inquiry::submit(Arc::new(mailer), route, inquiry),
                Message::SubmitCompleted,
            ),
            Err(err) => {
                eprintln!("Failed to configure mail transport: {}", err);
                Task::done(Message::SubmitCompleted(Outcome::Failed))
            }
        }
    }
}
