// SPDX-License-Identifier: MPL-2.0
//! User interface.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, handles its own `Message` and reports what the
//! application must do through an `Event`.
//!
//! # Screens
//!
//! - [`boot_screen`] - Progress, milestones and tips while the boot pipeline runs
//! - [`portfolio`] - The portfolio page
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`styles`] - Button, container and input styles
//! - [`notifications`] - Toast notifications

pub mod boot_screen;
pub mod design_tokens;
pub mod notifications;
pub mod portfolio;
pub mod styles;
pub mod theming;
