// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: sections, chrome, styles, and notifications.

pub mod contact_form;
pub mod design_tokens;
pub mod details;
pub mod gallery_grid;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod styles;
