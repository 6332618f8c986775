// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::{Catalog, ImageId};
use crate::error::Error;
use crate::inquiry::Outcome;
use crate::listing::Listing;
use crate::ui::contact_form;
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::widget::scrollable::RelativeOffset;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_grid::Message),
    Lightbox(lightbox::Message),
    Contact(contact_form::Message),
    Notification(notifications::Message),
    /// The page scrollable moved; used to track the active section.
    PageScrolled(RelativeOffset),
    /// A dispatched inquiry finished with this outcome.
    SubmitCompleted(Outcome),
    /// Result from prefetching a catalog image in the background.
    ImageFetched {
        id: ImageId,
        result: Result<Vec<u8>, Error>,
    },
}

/// Startup data resolved by `main.rs` before the event loop boots.
#[derive(Debug)]
pub struct Flags {
    /// The property listing to present.
    pub listing: Listing,
    /// The listing's validated image catalog.
    pub catalog: Catalog,
    /// Optional config directory override (from `--config-dir`).
    /// Takes precedence over the `VITRINA_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
