// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Listing(String),
    Mail(MailError),
}

/// Specific error types for mail delivery issues.
/// Used to report operator-facing failure causes without leaking panics
/// into the page shell.
#[derive(Debug, Clone)]
pub enum MailError {
    /// Sender or recipient address could not be parsed as a mailbox
    Address(String),

    /// The outbound message itself could not be assembled
    Message(String),

    /// The SMTP transport rejected or failed the delivery
    Transport(String),

    /// The transport could not be configured (relay host, credentials)
    Config(String),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Address(msg) => write!(f, "invalid address: {}", msg),
            MailError::Message(msg) => write!(f, "message build failed: {}", msg),
            MailError::Transport(msg) => write!(f, "delivery failed: {}", msg),
            MailError::Config(msg) => write!(f, "transport configuration failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Listing(e) => write!(f, "Listing Error: {}", e),
            Error::Mail(e) => write!(f, "Mail Error: {}", e),
        }
    }
}

impl From<MailError> for Error {
    fn from(err: MailError) -> Self {
        Error::Mail(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailError::Address(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::Message(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn listing_error_formats_properly() {
        let err = Error::Listing("duplicate image id 3".into());
        assert_eq!(format!("{}", err), "Listing Error: duplicate image id 3");
    }

    #[test]
    fn mail_error_wraps_into_error() {
        let err: Error = MailError::Transport("connection refused".to_string()).into();
        match err {
            Error::Mail(MailError::Transport(message)) => {
                assert!(message.contains("connection refused"));
            }
            _ => panic!("expected Mail variant"),
        }
    }

    #[test]
    fn mail_error_display_includes_cause() {
        let err = MailError::Address("missing domain".to_string());
        assert!(format!("{}", err).contains("missing domain"));
    }
}
