// SPDX-License-Identifier: MPL-2.0
//! `folio` is a personal portfolio desktop app built with the Iced GUI framework.
//!
//! The portfolio stays behind a boot screen until a staged readiness pipeline
//! has confirmed that the backend answers, every user-facing string resolves
//! and the splash image decodes. See [`boot`] for the orchestration and
//! [`ui`] for the screens.

pub mod app;
pub mod application;
pub mod boot;
pub mod contact;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
