// SPDX-License-Identifier: MPL-2.0
//! Boot screen domain types.
//!
//! Progress values, the ease-out ramp used to animate them, and the
//! milestone thresholds that pulse once per boot run.

pub mod easing;
pub mod milestones;
pub mod newtypes;

// Re-export commonly used types
pub use easing::{ease_out_cubic, Ramp, RampSample};
pub use milestones::{Milestone, MilestoneSet};
pub use newtypes::{progress_bounds, ProgressPercent};
