// SPDX-License-Identifier: MPL-2.0
//! The contact section: info panel plus the inquiry form.
//!
//! The form component owns the field values and the pending flag. While a
//! submission is in flight the submit button is disabled, so a double
//! click cannot dispatch the same inquiry twice. Field values are not
//! validated: any string, including an empty one, is submitted as-is.

use crate::config::ContactConfig;
use crate::inquiry::Inquiry;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Form state for one visitor session.
#[derive(Debug, Default)]
pub struct State {
    name: String,
    surname: String,
    email: String,
    phone: String,
    message: text_editor::Content,
    pending: bool,
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    SurnameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    MessageEdited(text_editor::Action),
    SubmitPressed,
    WhatsAppPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Dispatch this inquiry. The form is already marked pending.
    Submit(Inquiry),
    /// Copy the WhatsApp link to the clipboard.
    CopyWhatsApp,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Marks the in-flight submission as finished, re-enabling the button.
    pub fn finish_submission(&mut self) {
        self.pending = false;
    }

    /// Clears every field (after a successful submission).
    pub fn clear(&mut self) {
        *self = Self {
            pending: self.pending,
            ..Self::default()
        };
    }

    /// Builds the inquiry from the current field values, verbatim.
    #[must_use]
    pub fn inquiry(&self) -> Inquiry {
        // The editor content always ends with a synthetic newline.
        let message = self
            .message
            .text()
            .trim_end_matches('\n')
            .to_string();
        Inquiry {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::SurnameChanged(value) => {
                self.surname = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PhoneChanged(value) => {
                self.phone = value;
                Event::None
            }
            Message::MessageEdited(action) => {
                self.message.perform(action);
                Event::None
            }
            Message::SubmitPressed => {
                if self.pending {
                    return Event::None;
                }
                self.pending = true;
                Event::Submit(self.inquiry())
            }
            Message::WhatsAppPressed => Event::CopyWhatsApp,
        }
    }

    /// Renders the "Contáctenos" section.
    pub fn view<'a>(&'a self, contact: &'a ContactConfig) -> Element<'a, Message> {
        let title = Text::new("Contáctenos")
            .size(typography::SECTION_TITLE)
            .style(|_theme| iced::widget::text::Style {
                color: Some(palette::BROWN_700),
            });

        let content = Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(
                Row::new()
                    .spacing(spacing::XL)
                    .push(info_panel(contact))
                    .push(self.form_panel()),
            );

        Container::new(content)
            .width(Length::Fill)
            .padding([spacing::XXL, spacing::LG])
            .style(styles::container::section)
            .into()
    }

    fn form_panel(&self) -> Element<'_, Message> {
        let name_row = Row::new()
            .spacing(spacing::MD)
            .push(labeled_input(
                "Nombre",
                "Su nombre",
                &self.name,
                Message::NameChanged,
            ))
            .push(labeled_input(
                "Apellido",
                "Su apellido",
                &self.surname,
                Message::SurnameChanged,
            ));

        let message_field = Column::new()
            .spacing(spacing::XS)
            .push(field_label("Mensaje"))
            .push(
                text_editor(&self.message)
                    .placeholder("Escriba su mensaje o consulta aquí")
                    .on_action(Message::MessageEdited)
                    .height(Length::Fixed(120.0)),
            );

        let submit_label = if self.pending {
            "Enviando..."
        } else {
            "Enviar Mensaje"
        };
        let submit_button = button(
            Text::new(submit_label)
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press_maybe((!self.pending).then_some(Message::SubmitPressed))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::primary);

        let form = Column::new()
            .spacing(spacing::MD)
            .push(name_row)
            .push(labeled_input(
                "Correo Electrónico",
                "Su correo electrónico",
                &self.email,
                Message::EmailChanged,
            ))
            .push(labeled_input(
                "Teléfono",
                "Su número de teléfono",
                &self.phone,
                Message::PhoneChanged,
            ))
            .push(message_field)
            .push(submit_button);

        Container::new(form)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }
}

fn info_panel(contact: &ContactConfig) -> Element<'_, Message> {
    let heading = Text::new("¿Interesado en esta propiedad?")
        .size(typography::CARD_TITLE)
        .style(|_theme| iced::widget::text::Style {
            color: Some(palette::BROWN_700),
        });

    let blurb = Text::new(
        "Complete el formulario y nos pondremos en contacto con usted a la \
         brevedad para brindarle más información o agendar una visita a la \
         propiedad.",
    )
    .size(typography::BODY);

    let whatsapp_button = button(Text::new("WhatsApp").size(typography::BODY))
        .on_press(Message::WhatsAppPressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(heading)
        .push(blurb)
        .push(info_row("Teléfono", &contact.phone))
        .push(info_row("Correo", &contact.recipient))
        .push(info_row("Dirección", &contact.address))
        .push(whatsapp_button)
        .into()
}

fn info_row<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(palette::BROWN_500),
                }),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn field_label(label: &str) -> Text<'_> {
    Text::new(label)
        .size(typography::CAPTION)
        .style(|_theme| iced::widget::text::Style {
            color: Some(palette::BROWN_700),
        })
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(field_label(label))
        .push(
            text_input(placeholder, value)
                .on_input(on_input)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            name: "Ana".to_string(),
            surname: "Gomez".to_string(),
            email: "a@x.com".to_string(),
            phone: "300".to_string(),
            message: text_editor::Content::with_text("Hola"),
            pending: false,
        }
    }

    #[test]
    fn field_messages_update_state() {
        let mut state = State::new();
        state.update(Message::NameChanged("Ana".to_string()));
        state.update(Message::SurnameChanged("Gomez".to_string()));
        state.update(Message::EmailChanged("a@x.com".to_string()));
        state.update(Message::PhoneChanged("300".to_string()));

        let inquiry = state.inquiry();
        assert_eq!(inquiry.name, "Ana");
        assert_eq!(inquiry.surname, "Gomez");
        assert_eq!(inquiry.email, "a@x.com");
        assert_eq!(inquiry.phone, "300");
    }

    #[test]
    fn submit_carries_the_current_fields() {
        let mut state = filled_state();
        match state.update(Message::SubmitPressed) {
            Event::Submit(inquiry) => {
                assert_eq!(inquiry.name, "Ana");
                assert!(inquiry.message.contains("Hola"));
            }
            _ => panic!("expected Submit event"),
        }
        assert!(state.is_pending());
    }

    #[test]
    fn second_press_while_pending_is_swallowed() {
        let mut state = filled_state();
        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::Submit(_)
        ));
        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
    }

    #[test]
    fn finish_submission_reenables_the_button() {
        let mut state = filled_state();
        state.update(Message::SubmitPressed);
        state.finish_submission();
        assert!(!state.is_pending());
        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::Submit(_)
        ));
    }

    #[test]
    fn empty_fields_still_submit() {
        let mut state = State::new();
        match state.update(Message::SubmitPressed) {
            Event::Submit(inquiry) => {
                assert_eq!(inquiry, Inquiry::default());
            }
            _ => panic!("expected Submit event"),
        }
    }

    #[test]
    fn clear_resets_fields_but_not_pending() {
        let mut state = filled_state();
        state.update(Message::SubmitPressed);
        state.clear();
        assert!(state.is_pending());
        assert_eq!(state.inquiry().name, "");
    }
}
