// SPDX-License-Identifier: MPL-2.0
//! A single toast.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
}

impl Severity {
    /// Border accent of the toast.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// How long the toast stays once it is on screen.
    #[must_use]
    pub fn display_duration(self) -> Duration {
        Duration::from_secs(match self {
            Severity::Success => 3,
            Severity::Warning => 5,
        })
    }
}

/// A toast message, identified by its i18n key.
///
/// The display clock starts when the toast first becomes visible, not when
/// it is created, so a queued toast still gets its full duration.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            severity,
            message_key: message_key.into(),
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Starts the display clock. Later calls keep the first instant.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Whether the toast has been visible for its whole duration at `now`.
    /// A toast that was never shown never expires.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.shown_at.is_some_and(|shown| {
            now.saturating_duration_since(shown) >= self.severity.display_duration()
        })
    }
}
