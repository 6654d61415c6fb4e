// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Toasts are kept oldest first. The first [`MAX_VISIBLE`] are on screen;
//! the rest wait until an earlier one expires or is dismissed.

use super::notification::{Notification, NotificationId};
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut notification: Notification) {
        log::debug!(
            "Queueing {:?} toast {}",
            notification.severity(),
            notification.message_key()
        );
        if self.entries.len() < MAX_VISIBLE {
            notification.mark_shown(Instant::now());
        }
        self.entries.push(notification);
    }

    /// Removes the toast with `id`. Returns `false` when it is unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        self.reveal(Instant::now());
        self.entries.len() != before
    }

    /// Drops expired toasts and starts the clock of any toast that moved on screen.
    pub fn tick(&mut self, now: Instant) {
        self.entries.retain(|entry| !entry.is_expired(now));
        self.reveal(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        let Message::Dismiss(id) = message;
        self.dismiss(*id);
    }

    /// Toasts on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    fn reveal(&mut self, now: Instant) {
        for entry in self.entries.iter_mut().take(MAX_VISIBLE) {
            entry.mark_shown(now);
        }
    }
}
