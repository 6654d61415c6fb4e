// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports consumed by the boot pipeline and the portfolio.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) wires concrete adapters into
//!   [`BootPipeline`](crate::boot::BootPipeline)
//!
//! # Example
//!
//! ```ignore
//! use folio::application::port::Clock;
//! use folio::infrastructure::TokioClock;
//!
//! async fn settle(clock: &impl Clock) {
//!     clock.delay(std::time::Duration::from_millis(140)).await;
//! }
//! ```

pub mod port;
