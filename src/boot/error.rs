// SPDX-License-Identifier: MPL-2.0
//! Terminal boot failures.

use std::fmt;

/// A boot stage that failed. The boot screen stays visible and shows the
/// failure; there is no retry within the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    /// The health-check request never obtained an HTTP response.
    TransportUnreachable,

    /// A user-facing text entry resolved to an empty string.
    ContentValidationFailed,

    /// The splash asset could not be fetched or decoded.
    AssetLoadFailed,
}

impl BootError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BootError::TransportUnreachable => "boot-error-backend-unreachable",
            BootError::ContentValidationFailed => "boot-error-content-invalid",
            BootError::AssetLoadFailed => "boot-error-asset-failed",
        }
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::TransportUnreachable => write!(f, "Backend is not reachable."),
            BootError::ContentValidationFailed => write!(f, "User data text validation failed."),
            BootError::AssetLoadFailed => write!(f, "Asset image failed to load."),
        }
    }
}

impl std::error::Error for BootError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_error_i18n_keys() {
        assert_eq!(
            BootError::TransportUnreachable.i18n_key(),
            "boot-error-backend-unreachable"
        );
        assert_eq!(
            BootError::ContentValidationFailed.i18n_key(),
            "boot-error-content-invalid"
        );
        assert_eq!(
            BootError::AssetLoadFailed.i18n_key(),
            "boot-error-asset-failed"
        );
    }

    #[test]
    fn boot_error_display() {
        assert_eq!(
            BootError::TransportUnreachable.to_string(),
            "Backend is not reachable."
        );
    }
}
