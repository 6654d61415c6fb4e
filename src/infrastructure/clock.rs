// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed time adapters.
//!
//! Both adapters read `tokio::time::Instant`, so tests running on a paused
//! runtime (`start_paused = true`) see deterministic timestamps.

use crate::application::port::{Clock, FrameScheduler};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Frame interval, about 60 Hz.
///
/// Whole milliseconds, matching the resolution of tokio timers.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Monotonic clock measuring time since its creation.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn delay(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Emits frame timestamps at a fixed cadence on a [`TokioClock`] timeline.
#[derive(Debug, Clone, Copy)]
pub struct TokioFrameScheduler {
    clock: TokioClock,
    interval: Duration,
}

impl TokioFrameScheduler {
    /// Creates a 60 Hz scheduler sharing `clock`'s timeline.
    #[must_use]
    pub fn new(clock: TokioClock) -> Self {
        Self::with_interval(clock, FRAME_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(clock: TokioClock, interval: Duration) -> Self {
        Self { clock, interval }
    }
}

impl FrameScheduler for TokioFrameScheduler {
    fn next_frame(&self) -> impl Future<Output = Duration> + Send {
        let clock = self.clock;
        let interval = self.interval;
        async move {
            tokio::time::sleep(interval).await;
            clock.now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delay_advances_clock_by_requested_duration() {
        let clock = TokioClock::new();
        let before = clock.now();
        clock.delay(Duration::from_millis(140)).await;
        assert_eq!(clock.now() - before, Duration::from_millis(140));
    }

    #[tokio::test(start_paused = true)]
    async fn frames_share_the_clock_timeline() {
        let clock = TokioClock::new();
        let frames = TokioFrameScheduler::new(clock);
        let first = frames.next_frame().await;
        let second = frames.next_frame().await;
        assert!(second - first >= FRAME_INTERVAL);
        assert!(clock.now() >= second);
    }

    #[tokio::test(start_paused = true)]
    async fn frame_cadence_holds_at_timer_resolution() {
        let clock = TokioClock::new();
        let frames = TokioFrameScheduler::new(clock);
        let start = clock.now();
        for _ in 0..60 {
            frames.next_frame().await;
        }
        let elapsed = clock.now() - start;
        assert!(elapsed >= FRAME_INTERVAL * 60);
        assert!(elapsed < Duration::from_millis(17) * 60);
    }
}
