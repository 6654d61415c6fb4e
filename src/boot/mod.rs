// SPDX-License-Identifier: MPL-2.0
//! Boot sequence orchestration.
//!
//! The boot screen stays up until [`BootPipeline`] has confirmed that the
//! backend answers, that every user-facing string resolves, and that the
//! splash image decodes. Progress animates monotonically from 0 to 100 and
//! the screen is visible for at least the configured minimum duration.
//!
//! # Flow
//!
//! ```text
//! BootPipeline::run ──BootUpdate──▶ host update loop ──▶ BootState::apply
//!                                                  └──▶ Effect (flash / complete)
//! ```
//!
//! Cancelling the [`CancellationToken`] stops the run at its next
//! suspension point; nothing is emitted afterwards.

mod error;
pub mod headless;
pub mod pipeline;
mod registry;
pub mod state;
pub mod tips;

pub use error::BootError;
pub use pipeline::{BootPipeline, BootSettings, BootTimings, RunOutcome};
pub use registry::TextRegistry;
pub use state::{BootState, BootUpdate, Effect, StatusLine};
pub use tips::TipDeck;

use crate::infrastructure::{HttpProbe, ImageAssetLoader, TokioClock, TokioFrameScheduler};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token type for background tasks.
pub type CancellationToken = Arc<AtomicBool>;

/// Checks if the cancellation token has been triggered.
#[inline]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::SeqCst)
}

/// Triggers the cancellation token.
#[inline]
pub fn cancel(token: &CancellationToken) {
    token.store(true, Ordering::SeqCst);
}

/// Pipeline wired to the production adapters.
pub type LivePipeline = BootPipeline<TokioClock, TokioFrameScheduler, HttpProbe, ImageAssetLoader>;

/// Builds a pipeline backed by tokio timers and `client`.
#[must_use]
pub fn live_pipeline(client: reqwest::Client, texts: TextRegistry, settings: BootSettings) -> LivePipeline {
    let clock = TokioClock::new();
    BootPipeline::new(
        clock,
        TokioFrameScheduler::new(clock),
        HttpProbe::new(client.clone(), crate::infrastructure::http::DEFAULT_PROBE_TIMEOUT),
        ImageAssetLoader::new(client),
        texts,
        settings,
    )
}
