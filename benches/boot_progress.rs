// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use folio::boot::{BootState, BootUpdate, TipDeck};
use folio::domain::boot::{ProgressPercent, Ramp};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

fn ramp_sampling_benchmark(c: &mut Criterion) {
    let ramp = Ramp::new(0.0, 40.0, Duration::from_millis(800));

    c.bench_function("ramp_sample_frame", |b| {
        let mut elapsed = 0u64;
        b.iter(|| {
            elapsed = (elapsed + 16) % 900;
            black_box(ramp.sample(black_box(Duration::from_millis(elapsed))))
        });
    });
}

fn tip_deck_benchmark(c: &mut Criterion) {
    c.bench_function("tip_deck_advance", |b| {
        let mut deck = TipDeck::with_rng(12, StdRng::seed_from_u64(7));
        b.iter(|| black_box(deck.advance()));
    });
}

fn boot_state_benchmark(c: &mut Criterion) {
    c.bench_function("boot_state_full_run", |b| {
        b.iter(|| {
            let mut state = BootState::new(0);
            for step in 0..=100u8 {
                let update = BootUpdate::Progress(ProgressPercent::new(f32::from(step)));
                black_box(state.apply(update));
            }
            black_box(state.apply(BootUpdate::Exiting));
            black_box(state.apply(BootUpdate::Completed))
        });
    });
}

criterion_group!(
    benches,
    ramp_sampling_benchmark,
    tip_deck_benchmark,
    boot_state_benchmark
);
criterion_main!(benches);
