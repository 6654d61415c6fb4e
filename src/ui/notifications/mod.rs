// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages in the bottom-right corner: a copied project link,
//! or a settings file that could not be read or written.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - queue, visibility limit and auto-dismiss
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
