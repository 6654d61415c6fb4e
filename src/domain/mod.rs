// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core boot logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`boot`]: Boot screen value objects ([`ProgressPercent`](boot::ProgressPercent),
//!   [`Ramp`](boot::Ramp), [`MilestoneSet`](boot::MilestoneSet))

pub mod boot;
