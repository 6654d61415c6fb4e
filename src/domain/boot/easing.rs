// SPDX-License-Identifier: MPL-2.0
//! Time-based progress interpolation.
//!
//! Ramps are sampled from elapsed wall time rather than advanced per frame,
//! so a display that stops refreshing (minimized window, suspended
//! compositor) resumes at the correct value instead of replaying frames.

use std::time::Duration;

/// Ease-out cubic curve: `1 - (1 - t)^3`.
///
/// `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One sample of a [`Ramp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampSample {
    /// Interpolated value.
    pub value: f32,
    /// Whether the ramp has reached its end value.
    pub finished: bool,
}

/// Eased interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    from: f32,
    to: f32,
    duration: Duration,
}

impl Ramp {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    #[must_use]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Samples the ramp `elapsed` after it started.
    ///
    /// A zero-length ramp finishes on its first sample.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> RampSample {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let finished = t >= 1.0;
        let value = if finished {
            self.to
        } else {
            self.from + (self.to - self.from) * ease_out_cubic(t)
        };
        RampSample { value, finished }
    }
}
