// SPDX-License-Identifier: MPL-2.0
use folio::application::port::{
    AssetError, AssetLoader, AssetRef, Clock, ConnectivityProbe, LoadedAsset, ProbeError,
};
use folio::boot::{
    cancel, BootError, BootPipeline, BootSettings, BootState, BootTimings, BootUpdate,
    CancellationToken, Effect, RunOutcome, StatusLine, TextRegistry,
};
use folio::domain::boot::{Milestone, ProgressPercent};
use folio::infrastructure::{TokioClock, TokioFrameScheduler};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Fakes
// =============================================================================

struct FakeProbe {
    result: Result<u16, ProbeError>,
    latency: Duration,
}

impl FakeProbe {
    fn reachable(status: u16) -> Self {
        Self {
            result: Ok(status),
            latency: Duration::ZERO,
        }
    }

    fn unreachable() -> Self {
        Self {
            result: Err(ProbeError::Transport("connection refused".into())),
            latency: Duration::ZERO,
        }
    }
}

impl ConnectivityProbe for FakeProbe {
    fn probe(&self, _url: &str) -> impl Future<Output = Result<u16, ProbeError>> + Send {
        let result = self.result.clone();
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            result
        }
    }
}

struct FakeAssets {
    result: Result<LoadedAsset, AssetError>,
}

impl FakeAssets {
    fn ok() -> Self {
        Self {
            result: Ok(LoadedAsset {
                width: 1,
                height: 1,
                rgba: vec![0, 0, 0, 255],
            }),
        }
    }

    fn broken() -> Self {
        Self {
            result: Err(AssetError::Decode("truncated".into())),
        }
    }
}

impl AssetLoader for FakeAssets {
    fn load(&self, _asset: &AssetRef) -> impl Future<Output = Result<LoadedAsset, AssetError>> + Send {
        let result = self.result.clone();
        async move { result }
    }
}

type TestPipeline = BootPipeline<TokioClock, TokioFrameScheduler, FakeProbe, FakeAssets>;

fn texts() -> TextRegistry {
    TextRegistry::new()
        .with_entry("hero-name", "Khizar Hayat")
        .with_entry("contact-send", "Send Message")
}

fn settings() -> BootSettings {
    BootSettings {
        health_check_url: "https://backend.invalid/api/contact".into(),
        splash_asset: AssetRef::Embedded("projects/theforge-desktop.png".into()),
        minimum_duration: Duration::from_millis(2400),
        timings: BootTimings::default(),
    }
}

fn pipeline(clock: TokioClock, probe: FakeProbe, assets: FakeAssets, texts: TextRegistry) -> TestPipeline {
    BootPipeline::new(
        clock,
        TokioFrameScheduler::new(clock),
        probe,
        assets,
        texts,
        settings(),
    )
}

async fn run_recorded(pipeline: &TestPipeline, clock: TokioClock) -> (RunOutcome, Vec<(Duration, BootUpdate)>) {
    let token = CancellationToken::default();
    let mut updates = Vec::new();
    let outcome = pipeline
        .run(&token, |update| updates.push((clock.now(), update)))
        .await;
    (outcome, updates)
}

fn progress_values(updates: &[(Duration, BootUpdate)]) -> Vec<f32> {
    updates
        .iter()
        .filter_map(|(_, update)| match update {
            BootUpdate::Progress(progress) => Some(progress.value()),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test(start_paused = true)]
async fn successful_boot_completes_exactly_once() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());

    let (outcome, updates) = run_recorded(&pipeline, clock).await;

    assert_eq!(outcome, RunOutcome::Completed);
    let completions = updates
        .iter()
        .filter(|(_, update)| *update == BootUpdate::Completed)
        .count();
    assert_eq!(completions, 1);
    assert_eq!(updates.last().map(|(_, update)| *update), Some(BootUpdate::Completed));
}

#[tokio::test(start_paused = true)]
async fn progress_is_monotonic_and_bounded() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());

    let (_, updates) = run_recorded(&pipeline, clock).await;
    let values = progress_values(&updates);

    assert!(!values.is_empty());
    for pair in values.windows(2) {
        assert!(pair[1] >= pair[0], "progress regressed: {pair:?}");
    }
    assert!(values.iter().all(|value| (0.0..=100.0).contains(value)));
    assert_eq!(values.last().copied(), Some(100.0));
}

#[tokio::test(start_paused = true)]
async fn each_ramp_lands_on_its_milestone() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());

    let (_, updates) = run_recorded(&pipeline, clock).await;
    let values = progress_values(&updates);

    for milestone in [33.0, 66.0, 99.0] {
        assert!(values.contains(&milestone), "ramp never hit {milestone}");
    }
}

#[tokio::test(start_paused = true)]
async fn instant_stages_still_respect_minimum_duration() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(204), FakeAssets::ok(), texts());

    let (_, updates) = run_recorded(&pipeline, clock).await;

    let ready_at = updates
        .iter()
        .find(|(_, update)| *update == BootUpdate::Status(StatusLine::Ready))
        .map(|(at, _)| *at)
        .expect("ready status emitted");
    let completed_at = updates.last().map(|(at, _)| *at).expect("updates emitted");

    assert!(ready_at >= Duration::from_millis(2400), "ready at {ready_at:?}");
    assert!(completed_at >= Duration::from_millis(2400 + 180 + 180 + 460));
}

#[tokio::test(start_paused = true)]
async fn slow_backend_does_not_add_extra_wait() {
    let clock = TokioClock::new();
    let probe = FakeProbe {
        result: Ok(200),
        latency: Duration::from_secs(3),
    };
    let pipeline = pipeline(clock, probe, FakeAssets::ok(), texts());

    let (outcome, updates) = run_recorded(&pipeline, clock).await;

    assert_eq!(outcome, RunOutcome::Completed);
    let last_ramp_frame = updates
        .iter()
        .rev()
        .find(|(_, update)| *update == BootUpdate::Progress(ProgressPercent::new(99.0)))
        .map(|(at, _)| *at)
        .expect("preload ramp finished");
    let ready_at = updates
        .iter()
        .find(|(_, update)| *update == BootUpdate::Status(StatusLine::Ready))
        .map(|(at, _)| *at)
        .expect("ready status emitted");
    assert_eq!(ready_at, last_ramp_frame);
}

#[tokio::test(start_paused = true)]
async fn server_errors_still_count_as_reachable() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(503), FakeAssets::ok(), texts());

    let (outcome, _) = run_recorded(&pipeline, clock).await;

    assert_eq!(outcome, RunOutcome::Completed);
}

#[tokio::test(start_paused = true)]
async fn exit_transition_precedes_completion() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());

    let (_, updates) = run_recorded(&pipeline, clock).await;
    let tail: Vec<BootUpdate> = updates.iter().rev().take(4).rev().map(|(_, u)| *u).collect();

    assert_eq!(
        tail,
        vec![
            BootUpdate::Status(StatusLine::Ready),
            BootUpdate::Progress(ProgressPercent::COMPLETE),
            BootUpdate::Exiting,
            BootUpdate::Completed,
        ]
    );
}

// =============================================================================
// Failure paths
// =============================================================================

#[tokio::test(start_paused = true)]
async fn unreachable_backend_fails_closed() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::unreachable(), FakeAssets::ok(), texts());

    let (outcome, updates) = run_recorded(&pipeline, clock).await;

    assert_eq!(outcome, RunOutcome::Failed(BootError::TransportUnreachable));
    assert!(progress_values(&updates).iter().all(|value| *value == 0.0));
    assert!(!updates.iter().any(|(_, update)| *update == BootUpdate::Completed));
    assert_eq!(
        updates.last().map(|(_, update)| *update),
        Some(BootUpdate::Failed(BootError::TransportUnreachable))
    );
}

#[tokio::test(start_paused = true)]
async fn blank_text_stops_at_first_milestone() {
    let clock = TokioClock::new();
    let registry = texts().with_entry("hero-role", "   ");
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), registry);

    let (outcome, updates) = run_recorded(&pipeline, clock).await;

    assert_eq!(outcome, RunOutcome::Failed(BootError::ContentValidationFailed));
    let highest = progress_values(&updates).into_iter().fold(0.0_f32, f32::max);
    assert_eq!(highest, 33.0);
}

#[tokio::test(start_paused = true)]
async fn broken_asset_stops_at_second_milestone() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::broken(), texts());

    let (outcome, updates) = run_recorded(&pipeline, clock).await;

    assert_eq!(outcome, RunOutcome::Failed(BootError::AssetLoadFailed));
    let highest = progress_values(&updates).into_iter().fold(0.0_f32, f32::max);
    assert_eq!(highest, 66.0);
    assert!(!updates.iter().any(|(_, update)| *update == BootUpdate::Completed));
}

// =============================================================================
// Cancellation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn cancellation_mid_ramp_stops_all_updates() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());
    let token = CancellationToken::default();
    let trigger = Arc::clone(&token);
    let mut updates = Vec::new();
    let mut cancelled_after = None;

    let outcome = pipeline
        .run(&token, |update| {
            updates.push(update);
            if let BootUpdate::Progress(progress) = update {
                if progress.value() > 40.0 && cancelled_after.is_none() {
                    cancel(&trigger);
                    cancelled_after = Some(updates.len());
                }
            }
        })
        .await;

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert_eq!(Some(updates.len()), cancelled_after);
    assert!(!updates.contains(&BootUpdate::Completed));
}

#[tokio::test(start_paused = true)]
async fn pre_cancelled_token_emits_nothing() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());
    let token = CancellationToken::default();
    cancel(&token);
    let mut updates = Vec::new();

    let outcome = pipeline.run(&token, |update| updates.push(update)).await;

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert!(updates.is_empty());
}

// =============================================================================
// Host-side state
// =============================================================================

#[tokio::test(start_paused = true)]
async fn applied_updates_flash_each_milestone_once() {
    let clock = TokioClock::new();
    let pipeline = pipeline(clock, FakeProbe::reachable(200), FakeAssets::ok(), texts());
    let (_, updates) = run_recorded(&pipeline, clock).await;

    let mut state = BootState::default();
    let mut flashed = Vec::new();
    for (_, update) in updates {
        let mut effect = state.apply(update);
        while let Effect::StartFlash(milestone) = effect {
            assert!(milestone.is_hit(state.progress()));
            flashed.push(milestone);
            effect = state.clear_flash(milestone);
        }
    }

    assert_eq!(
        flashed,
        vec![Milestone::Connected, Milestone::Validated, Milestone::Preloaded]
    );
    assert!(state.is_completed());
    assert!(state.is_exiting());
}
