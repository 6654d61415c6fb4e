// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap tokio timers, `reqwest` and the
//! `image` crate.
//!
//! # Available Adapters
//!
//! - [`clock`]: Tokio-backed clock and frame cadence (implements [`Clock`], [`FrameScheduler`])
//! - [`http`]: Backend probe and contact form delivery (implements [`ConnectivityProbe`], [`ContactSender`])
//! - [`assets`]: Embedded, file and remote image loading (implements [`AssetLoader`])
//!
//! [`Clock`]: crate::application::port::Clock
//! [`FrameScheduler`]: crate::application::port::FrameScheduler
//! [`ConnectivityProbe`]: crate::application::port::ConnectivityProbe
//! [`ContactSender`]: crate::application::port::ContactSender
//! [`AssetLoader`]: crate::application::port::AssetLoader

pub mod assets;
pub mod clock;
pub mod http;

// Re-export main types for convenience
pub use assets::ImageAssetLoader;
pub use clock::{TokioClock, TokioFrameScheduler};
pub use http::{HttpContactSender, HttpProbe};
