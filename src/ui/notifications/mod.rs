// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform the visitor about actions
//! (inquiry sent, delivery failure, configuration warnings) without
//! blocking interaction. Success and info toasts auto-dismiss; errors
//! stay until dismissed manually.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
