// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Progress values and scroll offsets are `f32`; compare them with the
//! `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for percentages derived from fractions (scroll offsets, bar fill).
pub const PERCENT_EPSILON: f32 = 1e-4;
