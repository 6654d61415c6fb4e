// SPDX-License-Identifier: MPL-2.0
//! Boot screen state and the updates that mutate it.
//!
//! [`BootState`] has a single writer: the host's update loop. The pipeline
//! never touches it directly; it emits [`BootUpdate`] values which the host
//! applies in order.

use super::BootError;
use crate::domain::boot::{Milestone, MilestoneSet, ProgressPercent};

/// Status line shown under the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    /// A stage is running.
    #[default]
    Loading,
    /// All stages passed and the screen is about to close.
    Ready,
    /// A stage failed; the boot screen stays up.
    Failed(BootError),
}

impl StatusLine {
    /// Returns the i18n message key for this status.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StatusLine::Loading => "boot-status-loading",
            StatusLine::Ready => "boot-status-ready",
            StatusLine::Failed(error) => error.i18n_key(),
        }
    }
}

/// One discrete state change emitted by the boot pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BootUpdate {
    Status(StatusLine),
    Progress(ProgressPercent),
    /// The exit transition has started.
    Exiting,
    /// The host may reveal its content. Emitted at most once, only on success.
    Completed,
    Failed(BootError),
}

/// Side effect the host must perform after applying an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule the end of this milestone's flash.
    StartFlash(Milestone),
    /// Leave the boot screen.
    Complete,
}

/// Everything the boot screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BootState {
    progress: ProgressPercent,
    status: StatusLine,
    tip_index: usize,
    is_exiting: bool,
    milestones: MilestoneSet,
    flashing: Option<Milestone>,
    completed: bool,
}

impl BootState {
    #[must_use]
    pub fn new(tip_index: usize) -> Self {
        Self {
            progress: ProgressPercent::ZERO,
            status: StatusLine::Loading,
            tip_index,
            is_exiting: false,
            milestones: MilestoneSet::new(),
            flashing: None,
            completed: false,
        }
    }

    #[must_use]
    pub fn progress(&self) -> ProgressPercent {
        self.progress
    }

    #[must_use]
    pub fn status(&self) -> StatusLine {
        self.status
    }

    #[must_use]
    pub fn tip_index(&self) -> usize {
        self.tip_index
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    /// Milestone currently pulsing, if any.
    #[must_use]
    pub fn flashing(&self) -> Option<Milestone> {
        self.flashing
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, StatusLine::Failed(_))
    }

    /// Applies one pipeline update.
    ///
    /// Progress never regresses. Once the run has failed or completed, further
    /// updates are ignored.
    pub fn apply(&mut self, update: BootUpdate) -> Effect {
        if self.completed || self.is_failed() {
            return Effect::None;
        }
        match update {
            BootUpdate::Status(status) => {
                self.status = status;
                Effect::None
            }
            BootUpdate::Progress(progress) => {
                self.progress = self.progress.max(progress);
                self.start_next_flash()
            }
            BootUpdate::Exiting => {
                self.is_exiting = true;
                Effect::None
            }
            BootUpdate::Completed => {
                self.completed = true;
                Effect::Complete
            }
            BootUpdate::Failed(error) => {
                self.status = StatusLine::Failed(error);
                Effect::None
            }
        }
    }

    /// Ends the flash of `milestone`.
    ///
    /// If progress has already passed another milestone that has not flashed
    /// yet, that one starts immediately.
    pub fn clear_flash(&mut self, milestone: Milestone) -> Effect {
        if self.flashing != Some(milestone) {
            return Effect::None;
        }
        self.flashing = None;
        self.start_next_flash()
    }

    /// Shows another tip.
    pub fn rotate_tip(&mut self, tip_index: usize) {
        self.tip_index = tip_index;
    }

    fn start_next_flash(&mut self) -> Effect {
        if self.flashing.is_some() {
            return Effect::None;
        }
        match self.milestones.observe(self.progress) {
            Some(milestone) => {
                self.flashing = Some(milestone);
                Effect::StartFlash(milestone)
            }
            None => Effect::None,
        }
    }
}

impl Default for BootState {
    fn default() -> Self {
        Self::new(0)
    }
}
