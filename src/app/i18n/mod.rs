// SPDX-License-Identifier: MPL-2.0
//! Localization backed by Fluent resources embedded at build time.

pub mod fluent;
