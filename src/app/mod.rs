// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the gallery viewer, the contact form,
//! and the notification manager, and translates messages into side
//! effects like scroll-lock toggling, image prefetching, and inquiry
//! dispatch. Policy decisions (window sizing, scroll suppression, outcome
//! surfacing) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::ImageId;
use crate::config::{self, Config, WindowConfig};
use crate::gallery::GalleryViewer;
use crate::listing::Listing;
use crate::ui::contact_form;
use crate::ui::design_tokens::palette;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::widget::image::Handle;
use iced::widget::Id;
use iced::{window, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

/// Suppression of page scrolling while the lightbox is open.
///
/// The viewer itself stays pure; the shell acquires the lock when a
/// selection appears and releases it when the selection clears. While the
/// lock is held the view layers an event-swallowing overlay over the
/// page, so nothing underneath scrolls.
#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.locked = true;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Root Iced application state bridging the page sections.
pub struct App {
    listing: Listing,
    config: Config,
    gallery: GalleryViewer,
    contact: contact_form::State,
    active_section: navbar::Section,
    scroll_lock: ScrollLock,
    /// Decoded image handles, filled in as prefetches complete.
    images: HashMap<ImageId, Handle>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("listing", &self.listing.title)
            .field("selection", &self.gallery.selection())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(window: &WindowConfig) -> window::Settings {
    window::Settings {
        size: iced::Size::new(window.width as f32, window.height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Id of the page scrollable, shared between the view and the navbar's
/// snap-to-section tasks.
pub(crate) fn page_scroll_id() -> Id {
    Id::new("page")
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load(flags.config_dir.as_deref());
    let window = window_settings(&config.window);

    // Wrap the startup data in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced requires Fn, not
    // FnOnce).
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous prefetching
    /// of every catalog image.
    fn new(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let Flags {
            listing, catalog, ..
        } = flags;

        let mut notifications = notifications::Manager::new();
        if let Some(warning) = config_warning {
            notifications.push(notifications::Notification::warning(warning));
        }

        let fetch_tasks: Vec<Task<Message>> = catalog
            .iter()
            .map(|image| {
                let id = image.id;
                let source = image.source.clone();
                Task::perform(
                    async move { (id, crate::loader::fetch(&source).await) },
                    |(id, result)| Message::ImageFetched { id, result },
                )
            })
            .collect();

        let app = App {
            listing,
            config,
            gallery: GalleryViewer::new(catalog),
            contact: contact_form::State::new(),
            active_section: navbar::Section::default(),
            scroll_lock: ScrollLock::default(),
            images: HashMap::new(),
            notifications,
        };

        (app, Task::batch(fetch_tasks))
    }

    fn title(&self) -> String {
        self.listing.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::custom(
            "Vitrina".to_string(),
            iced::theme::Palette {
                background: palette::CREAM,
                text: palette::BROWN_700,
                primary: palette::BROWN_500,
                ..Theme::Light.palette()
            },
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::keyboard_subscription(),
            subscription::tick_subscription(self.notifications.has_notifications()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_lock_follows_acquire_and_release() {
        let mut lock = ScrollLock::default();
        assert!(!lock.is_locked());

        lock.acquire();
        assert!(lock.is_locked());
        lock.acquire();
        assert!(lock.is_locked());

        lock.release();
        assert!(!lock.is_locked());
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn window_settings_respect_config() {
        let settings = window_settings(&WindowConfig {
            width: 1280,
            height: 720,
        });
        assert_eq!(settings.size.width, 1280.0);
        assert_eq!(settings.size.height, 720.0);
    }
}
