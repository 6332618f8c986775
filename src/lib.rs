// SPDX-License-Identifier: MPL-2.0
//! `vitrina` is a single-property real-estate showcase built with the
//! Iced GUI framework.
//!
//! It renders a listing's details, an image gallery with a lightbox
//! viewer, and a contact form that emails inquiries over SMTP. The
//! gallery viewer and the inquiry pipeline are plain library modules;
//! the `app` and `ui` modules supply the page shell around them.

#![doc(html_root_url = "https://docs.rs/vitrina/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod inquiry;
pub mod listing;
pub mod loader;
pub mod mail;
pub mod ui;
