// SPDX-License-Identifier: MPL-2.0
//! Inquiry submission pipeline: form fields in, one outbound email out.
//!
//! Each submission builds a transient [`Inquiry`], renders the fixed
//! message template, and hands the result to the mail-sending capability
//! exactly once. Any failure is converted into [`Outcome::Failed`] and
//! logged; nothing escapes the pipeline as a panic or error value.
//!
//! Field values are accepted verbatim: no format validation, empty
//! strings allowed. Because the body is HTML, interpolated values are
//! escaped during rendering (see DESIGN.md for the recorded deviation).

use crate::mail::{Mailer, OutboundMessage};
use maud::html;
use std::sync::Arc;

/// One user-submitted contact request. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Result of one submission attempt, surfaced to the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

/// Fixed sender/recipient identities and subject line for every inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRoute {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
}

impl Inquiry {
    /// Renders the fixed HTML body, embedding the four identity fields and
    /// the message verbatim (values escaped for HTML).
    #[must_use]
    pub fn render_body(&self) -> String {
        html! {
            h1 { "Hola soy " (self.name) " " (self.surname) }
            p { "Mi correo es " (self.email) }
            p { "Mi telefono es " (self.phone) }
            p { (self.message) }
            p { "Gracias por su atención" }
        }
        .into_string()
    }
}

/// Submits one inquiry: renders the template, invokes the mail-sending
/// capability exactly once, and reports the outcome.
///
/// The calling context must not assume the outcome before this future
/// resolves; the page stays interactive meanwhile. Concurrent submissions
/// are independent units — each renders and delivers its own inquiry.
pub async fn submit(mailer: Arc<dyn Mailer>, route: MailRoute, inquiry: Inquiry) -> Outcome {
    let message = OutboundMessage {
        sender: route.sender,
        recipient: route.recipient,
        subject: route.subject,
        body_html: inquiry.render_body(),
    };

    match mailer.deliver(message).await {
        Ok(()) => Outcome::Sent,
        Err(err) => {
            eprintln!("Failed to deliver inquiry: {}", err);
            Outcome::Failed
        }
    }
}
