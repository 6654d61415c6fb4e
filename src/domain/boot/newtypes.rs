// SPDX-License-Identifier: MPL-2.0
//! Boot newtypes.
//!
//! This module provides type-safe wrappers for boot screen values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Progress Bounds
// =============================================================================

/// Progress percentage bounds (0% to 100%).
pub mod progress_bounds {
    /// Progress before any stage has run.
    pub const MIN: f32 = 0.0;
    /// Progress once the boot screen is about to close.
    pub const MAX: f32 = 100.0;
}

// =============================================================================
// ProgressPercent
// =============================================================================

/// Boot progress percentage, guaranteed to be within valid range (0%–100%).
///
/// Non-finite inputs collapse to the minimum so a bad sample can never
/// push the progress bar outside its track.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressPercent(f32);

impl ProgressPercent {
    /// Progress at boot start.
    pub const ZERO: Self = Self(progress_bounds::MIN);

    /// Progress at completion.
    pub const COMPLETE: Self = Self(progress_bounds::MAX);

    /// Creates a new progress value, clamping to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        Self(percent.clamp(progress_bounds::MIN, progress_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the progress as a fraction (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / progress_bounds::MAX
    }

    /// Returns the value rounded for display (e.g., "66%").
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }

    /// Returns the larger of two progress values.
    ///
    /// Used to keep the displayed progress monotonic.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}
