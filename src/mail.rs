// SPDX-License-Identifier: MPL-2.0
//! The mail-sending capability boundary.
//!
//! The inquiry pipeline only ever talks to the [`Mailer`] trait, so the
//! real SMTP transport can be swapped for a stub in tests. [`SmtpMailer`]
//! is the production implementation: an implicit-TLS SMTP relay with
//! credentials taken from the `[smtp]` configuration section.

use crate::config::SmtpConfig;
use crate::error::MailError;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

/// One fully rendered outbound message, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body_html: String,
}

/// A capability that can deliver one rendered message.
///
/// Implementations must not panic on failure; every problem is reported
/// through [`MailError`].
pub trait Mailer: Send + Sync {
    /// Delivers the message, exactly one attempt, no retries.
    fn deliver(&self, message: OutboundMessage) -> BoxFuture<'static, Result<(), MailError>>;
}

/// SMTP delivery over an implicit-TLS relay (submissions port 465).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from the `[smtp]` configuration section.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|err| MailError::Config(err.to_string()))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    fn deliver(&self, message: OutboundMessage) -> BoxFuture<'static, Result<(), MailError>> {
        let transport = self.transport.clone();
        async move {
            let email = build_email(&message)?;
            transport.send(email).await?;
            Ok(())
        }
        .boxed()
    }
}

/// Assembles the lettre message from an [`OutboundMessage`].
fn build_email(message: &OutboundMessage) -> Result<lettre::Message, MailError> {
    let sender: Mailbox = message.sender.parse()?;
    let recipient: Mailbox = message.recipient.parse()?;

    let email = lettre::Message::builder()
        .from(sender)
        .to(recipient)
        .subject(message.subject.clone())
        .singlepart(SinglePart::html(message.body_html.clone()))?;

    Ok(email)
}
