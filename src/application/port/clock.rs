// SPDX-License-Identifier: MPL-2.0
//! Monotonic clock port.

use std::future::Future;
use std::time::Duration;

/// Monotonic time source shared by the pipeline and its frame scheduler.
///
/// `now()` returns the time elapsed since an arbitrary fixed origin. Only
/// differences between two readings are meaningful.
pub trait Clock: Send + Sync {
    /// Current position on the clock's timeline.
    fn now(&self) -> Duration;

    /// Resolves once `duration` has elapsed on this clock.
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}
