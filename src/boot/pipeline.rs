// SPDX-License-Identifier: MPL-2.0
//! The staged boot sequence.
//!
//! Stages run strictly in order. Each one ends with an eased progress ramp
//! to its milestone. The first failing stage aborts the run without emitting
//! further progress; completion is only ever signalled after every stage
//! passed and the minimum visible duration has elapsed.
//!
//! | Stage        | Check                          | Ramp      |
//! |--------------|--------------------------------|-----------|
//! | connectivity | one `GET` to the health check  | 0 → 33    |
//! | content      | text registry non-empty        | 33 → 66   |
//! | asset        | splash image decodes           | 66 → 99   |
//! | finalize     | minimum duration, exit hold    | → 100     |

use super::{is_cancelled, BootError, BootUpdate, CancellationToken, StatusLine, TextRegistry};
use crate::application::port::{AssetLoader, AssetRef, Clock, ConnectivityProbe, FrameScheduler};
use crate::domain::boot::{ProgressPercent, Ramp};
use std::time::Duration;

// =============================================================================
// Settings
// =============================================================================

/// Delays and ramp lengths of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTimings {
    pub initial_settle: Duration,
    pub connect_ramp: Duration,
    pub validate_settle: Duration,
    pub validate_ramp: Duration,
    pub preload_ramp: Duration,
    pub ready_hold: Duration,
    pub complete_hold: Duration,
    pub exit_hold: Duration,
}

impl Default for BootTimings {
    fn default() -> Self {
        Self {
            initial_settle: Duration::from_millis(140),
            connect_ramp: Duration::from_millis(500),
            validate_settle: Duration::from_millis(120),
            validate_ramp: Duration::from_millis(560),
            preload_ramp: Duration::from_millis(620),
            ready_hold: Duration::from_millis(180),
            complete_hold: Duration::from_millis(180),
            exit_hold: Duration::from_millis(460),
        }
    }
}

/// What the pipeline checks and for how long the screen stays up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSettings {
    pub health_check_url: String,
    pub splash_asset: AssetRef,
    /// Minimum time between the start of the run and the ready status.
    pub minimum_duration: Duration,
    pub timings: BootTimings,
}

// =============================================================================
// Outcome
// =============================================================================

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Failed(BootError),
    Cancelled,
}

/// Why the stage chain stopped early.
enum Halt {
    Cancelled,
    Failed(BootError),
}

/// Forwards updates to the host until the token is cancelled.
struct Emitter<'a, E> {
    token: &'a CancellationToken,
    emit: E,
}

impl<E: FnMut(BootUpdate)> Emitter<'_, E> {
    fn check(&self) -> Result<(), Halt> {
        if is_cancelled(self.token) {
            Err(Halt::Cancelled)
        } else {
            Ok(())
        }
    }

    fn send(&mut self, update: BootUpdate) -> Result<(), Halt> {
        self.check()?;
        (self.emit)(update);
        Ok(())
    }
}

// =============================================================================
// BootPipeline
// =============================================================================

/// Runs the boot sequence against injected platform capabilities.
pub struct BootPipeline<C, F, P, A> {
    clock: C,
    frames: F,
    probe: P,
    assets: A,
    texts: TextRegistry,
    settings: BootSettings,
}

impl<C, F, P, A> BootPipeline<C, F, P, A>
where
    C: Clock,
    F: FrameScheduler,
    P: ConnectivityProbe,
    A: AssetLoader,
{
    pub fn new(
        clock: C,
        frames: F,
        probe: P,
        assets: A,
        texts: TextRegistry,
        settings: BootSettings,
    ) -> Self {
        Self {
            clock,
            frames,
            probe,
            assets,
            texts,
            settings,
        }
    }

    /// Runs every stage, reporting state changes through `emit`.
    ///
    /// Nothing is emitted once `token` is cancelled. [`BootUpdate::Completed`]
    /// is emitted exactly once on success and never otherwise.
    pub async fn run<E>(&self, token: &CancellationToken, emit: E) -> RunOutcome
    where
        E: FnMut(BootUpdate) + Send,
    {
        let mut out = Emitter { token, emit };
        let start = self.clock.now();
        log::info!("Boot sequence started");

        match self.stages(start, &mut out).await {
            Ok(()) => {
                log::info!(
                    "Boot sequence completed after {:?}",
                    self.clock.now().saturating_sub(start)
                );
                RunOutcome::Completed
            }
            Err(Halt::Failed(error)) => {
                log::warn!("Boot sequence failed: {error}");
                match out.send(BootUpdate::Failed(error)) {
                    Ok(()) => RunOutcome::Failed(error),
                    Err(_) => RunOutcome::Cancelled,
                }
            }
            Err(Halt::Cancelled) => {
                log::debug!("Boot sequence cancelled");
                RunOutcome::Cancelled
            }
        }
    }

    async fn stages<E>(&self, start: Duration, out: &mut Emitter<'_, E>) -> Result<(), Halt>
    where
        E: FnMut(BootUpdate) + Send,
    {
        let timings = self.settings.timings;

        out.send(BootUpdate::Status(StatusLine::Loading))?;
        self.settle(timings.initial_settle, out).await?;

        self.check_connectivity(out).await?;
        self.ramp(0.0, 33.0, timings.connect_ramp, out).await?;

        out.send(BootUpdate::Status(StatusLine::Loading))?;
        self.settle(timings.validate_settle, out).await?;
        self.validate_texts()?;
        self.ramp(33.0, 66.0, timings.validate_ramp, out).await?;

        out.send(BootUpdate::Status(StatusLine::Loading))?;
        self.preload_asset(out).await?;
        self.ramp(66.0, 99.0, timings.preload_ramp, out).await?;

        self.finalize(start, out).await
    }

    async fn settle<E>(&self, duration: Duration, out: &mut Emitter<'_, E>) -> Result<(), Halt>
    where
        E: FnMut(BootUpdate) + Send,
    {
        self.clock.delay(duration).await;
        out.check()
    }

    async fn check_connectivity<E>(&self, out: &mut Emitter<'_, E>) -> Result<(), Halt>
    where
        E: FnMut(BootUpdate) + Send,
    {
        let url = &self.settings.health_check_url;
        let result = self.probe.probe(url).await;
        out.check()?;
        match result {
            Ok(status) => {
                log::info!("Backend reachable at {url} (HTTP {status})");
                Ok(())
            }
            Err(err) => {
                log::warn!("Backend probe to {url} failed: {err}");
                Err(Halt::Failed(BootError::TransportUnreachable))
            }
        }
    }

    fn validate_texts(&self) -> Result<(), Halt> {
        self.texts.validate().map_err(|blank| {
            log::warn!("Blank user-facing text: {}", blank.join(", "));
            Halt::Failed(BootError::ContentValidationFailed)
        })?;
        log::debug!("Validated {} text entries", self.texts.len());
        Ok(())
    }

    async fn preload_asset<E>(&self, out: &mut Emitter<'_, E>) -> Result<(), Halt>
    where
        E: FnMut(BootUpdate) + Send,
    {
        let asset = &self.settings.splash_asset;
        let result = self.assets.load(asset).await;
        out.check()?;
        match result {
            Ok(image) => {
                log::info!("Preloaded {asset} ({}x{})", image.width, image.height);
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to preload {asset}: {err}");
                Err(Halt::Failed(BootError::AssetLoadFailed))
            }
        }
    }

    /// Animates progress from `from` to `to`, one sample per frame.
    ///
    /// Samples are computed from elapsed time, so skipped frames shorten the
    /// animation rather than stretching it.
    async fn ramp<E>(
        &self,
        from: f32,
        to: f32,
        duration: Duration,
        out: &mut Emitter<'_, E>,
    ) -> Result<(), Halt>
    where
        E: FnMut(BootUpdate) + Send,
    {
        let ramp = Ramp::new(from, to, duration);
        let started = self.clock.now();
        loop {
            let frame = self.frames.next_frame().await;
            out.check()?;
            let sample = ramp.sample(frame.saturating_sub(started));
            out.send(BootUpdate::Progress(ProgressPercent::new(sample.value)))?;
            if sample.finished {
                return Ok(());
            }
        }
    }

    async fn finalize<E>(&self, start: Duration, out: &mut Emitter<'_, E>) -> Result<(), Halt>
    where
        E: FnMut(BootUpdate) + Send,
    {
        let timings = self.settings.timings;
        let elapsed = self.clock.now().saturating_sub(start);
        if let Some(remaining) = self.settings.minimum_duration.checked_sub(elapsed) {
            if !remaining.is_zero() {
                self.settle(remaining, out).await?;
            }
        }

        out.send(BootUpdate::Status(StatusLine::Ready))?;
        self.settle(timings.ready_hold, out).await?;
        out.send(BootUpdate::Progress(ProgressPercent::COMPLETE))?;
        self.settle(timings.complete_hold, out).await?;
        out.send(BootUpdate::Exiting)?;
        self.settle(timings.exit_hold, out).await?;
        out.send(BootUpdate::Completed)
    }
}
