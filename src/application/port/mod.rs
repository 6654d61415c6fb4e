// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The boot pipeline only ever talks to these traits, which lets tests drive it
//! with scripted fakes on a paused clock.
//!
//! # Available Ports
//!
//! - [`asset`]: Splash asset loading and decoding
//! - [`clock`]: Monotonic time source and delays
//! - [`contact`]: Contact form submission
//! - [`frames`]: Display frame cadence
//! - [`probe`]: Backend reachability probe
//!
//! # Design Notes
//!
//! - All traits use plain data types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so a pipeline can run inside an Iced task
//! - Async methods return `impl Future + Send` rather than using `async fn`,
//!   so callers can rely on the futures being `Send`

pub mod asset;
pub mod clock;
pub mod contact;
pub mod frames;
pub mod probe;

// Re-export main types for convenience
pub use asset::{AssetError, AssetLoader, AssetRef, LoadedAsset};
pub use clock::Clock;
pub use contact::{ContactError, ContactResponse, ContactSender, ContactSubmission};
pub use frames::FrameScheduler;
pub use probe::{ConnectivityProbe, ProbeError};
