// SPDX-License-Identifier: MPL-2.0
//! Display frame port.
//!
//! Ramps are sampled once per frame. The scheduler decides the cadence; the
//! pipeline only uses the returned timestamp to compute elapsed time.

use std::future::Future;
use std::time::Duration;

/// Source of display frame callbacks.
pub trait FrameScheduler: Send + Sync {
    /// Resolves at the next display frame.
    ///
    /// The returned timestamp lies on the same timeline as the
    /// [`Clock`](super::Clock) the pipeline was built with.
    fn next_frame(&self) -> impl Future<Output = Duration> + Send;
}
