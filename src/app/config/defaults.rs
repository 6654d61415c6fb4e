// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Health-check and contact endpoints
//! - **Boot**: Splash asset, minimum visible duration, tip rotation
//! - **Animation**: Milestone flash and stat counter durations

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Endpoint probed during boot to check that the backend answers.
pub const DEFAULT_HEALTH_CHECK_URL: &str = "https://portfolio2-server.vercel.app/api/contact";

/// Endpoint receiving contact form submissions.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://portfolio2-server.vercel.app/api/contact";

// ==========================================================================
// Boot Defaults
// ==========================================================================

/// Image preloaded before the portfolio is revealed.
pub const DEFAULT_SPLASH_ASSET: &str = "embedded:projects/theforge-desktop.png";

/// Minimum time the boot screen stays up before announcing readiness (ms).
pub const DEFAULT_MINIMUM_DURATION_MS: u64 = 2400;

/// Minimum allowed value for `minimum_duration_ms`.
pub const MIN_MINIMUM_DURATION_MS: u64 = 0;

/// Maximum allowed value for `minimum_duration_ms`.
pub const MAX_MINIMUM_DURATION_MS: u64 = 10_000;

/// Interval between two tips on the boot screen (ms).
pub const DEFAULT_TIP_ROTATION_MS: u64 = 5000;

/// Minimum tip rotation interval (ms).
pub const MIN_TIP_ROTATION_MS: u64 = 1000;

/// Maximum tip rotation interval (ms).
pub const MAX_TIP_ROTATION_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// How long a milestone pulses once reached (ms).
pub const MILESTONE_FLASH_MS: u64 = 460;

/// Duration of the stat counter animation (ms).
pub const STATS_COUNT_DURATION_MS: u64 = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_defaults_are_within_bounds() {
        assert!((MIN_MINIMUM_DURATION_MS..=MAX_MINIMUM_DURATION_MS)
            .contains(&DEFAULT_MINIMUM_DURATION_MS));
        assert!((MIN_TIP_ROTATION_MS..=MAX_TIP_ROTATION_MS).contains(&DEFAULT_TIP_ROTATION_MS));
    }

    #[test]
    fn default_splash_asset_is_embedded() {
        assert!(DEFAULT_SPLASH_ASSET.starts_with("embedded:"));
    }
}
