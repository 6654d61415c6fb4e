// SPDX-License-Identifier: MPL-2.0
//! Progress milestones.
//!
//! Each stage of the boot pipeline ends on a fixed threshold. The first time
//! progress reaches a threshold, that milestone pulses once.

use super::ProgressPercent;

/// A fixed progress threshold marking the end of a boot stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Milestone {
    /// Backend reachable (33%).
    Connected,
    /// User-facing text validated (66%).
    Validated,
    /// Splash asset preloaded (99%).
    Preloaded,
}

impl Milestone {
    /// All milestones in ascending threshold order.
    pub const ALL: [Milestone; 3] = [
        Milestone::Connected,
        Milestone::Validated,
        Milestone::Preloaded,
    ];

    /// Returns the progress percentage at which this milestone is reached.
    #[must_use]
    pub fn threshold(self) -> f32 {
        match self {
            Milestone::Connected => 33.0,
            Milestone::Validated => 66.0,
            Milestone::Preloaded => 99.0,
        }
    }

    fn slot(self) -> usize {
        match self {
            Milestone::Connected => 0,
            Milestone::Validated => 1,
            Milestone::Preloaded => 2,
        }
    }

    /// Returns whether `progress` is at or past this milestone.
    #[must_use]
    pub fn is_hit(self, progress: ProgressPercent) -> bool {
        progress.value() >= self.threshold()
    }
}

/// Tracks which milestones have already flashed during one boot run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneSet {
    flashed: [bool; 3],
}

impl MilestoneSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a progress value and returns the milestone that should start
    /// flashing, if any.
    ///
    /// At most one milestone is returned per call, the lowest one not yet
    /// flashed. Callers re-observe after a flash ends so that a single jump
    /// across several thresholds pulses each of them in turn.
    pub fn observe(&mut self, progress: ProgressPercent) -> Option<Milestone> {
        let next = Milestone::ALL
            .into_iter()
            .find(|milestone| !self.flashed[milestone.slot()] && milestone.is_hit(progress))?;
        self.flashed[next.slot()] = true;
        Some(next)
    }
}
