// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration section.

/// Fixed recipient of inquiry emails (the listing agency).
pub const DEFAULT_RECIPIENT: &str = "asesoria@yconsultores.com";

/// Fixed subject line of inquiry emails.
pub const DEFAULT_SUBJECT: &str = "Interesado en casa laureles";

/// Phone number shown in the contact panel and used for the WhatsApp link.
pub const DEFAULT_PHONE: &str = "+57 300 610 4153";

/// Street address shown in the contact panel.
pub const DEFAULT_ADDRESS: &str = "Barrio Laureles, Medellín, Colombia";

/// SMTP relay host for outbound mail (implicit TLS, port 465).
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

pub const DEFAULT_WINDOW_WIDTH: u32 = 1100;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 760;

pub fn default_recipient() -> String {
    DEFAULT_RECIPIENT.to_string()
}

pub fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

pub fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

pub fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

pub fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}

pub fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

pub fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}
