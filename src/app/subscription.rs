// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts drive the lightbox (Escape closes, arrow keys step
//! through the ring); a periodic tick expires toast notifications while
//! any are showing.

use super::Message;
use crate::gallery::Direction;
use crate::ui::lightbox;
use crate::ui::notifications;
use iced::keyboard::{self, key::Named, Key};
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between notification auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Routes key presses to the lightbox.
///
/// The handlers are idempotent against an idle viewer: closing with no
/// selection does nothing and navigation without a selection is ignored,
/// so the shortcuts can stay active on every screen state.
pub fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed { key, .. } => match key {
            Key::Named(Named::Escape) => Some(Message::Lightbox(lightbox::Message::Close)),
            Key::Named(Named::ArrowLeft) => Some(Message::Lightbox(lightbox::Message::Navigate(
                Direction::Previous,
            ))),
            Key::Named(Named::ArrowRight) => Some(Message::Lightbox(lightbox::Message::Navigate(
                Direction::Next,
            ))),
            _ => None,
        },
        _ => None,
    })
}

/// Ticks the notification manager while toasts are showing.
pub fn tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|_| Message::Notification(notifications::Message::Tick))
    } else {
        Subscription::none()
    }
}
