//! Layout engine micro-benchmarks
//!
//! Measures packing throughput for fixed-height and scored builds, plus the
//! incremental append path a growing gallery exercises.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mosaic::{LayoutEngine, LayoutOptions, LayoutState, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_photos(seed: u64, n: usize) -> Vec<Size> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Size::new(
                rng.random_range(800.0..6000.0),
                rng.random_range(600.0..4000.0),
            )
        })
        .collect()
}

fn bench_fixed_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_mode");
    let engine = LayoutEngine::new(1280, &LayoutOptions::default());

    for count in [100, 1_000, 10_000] {
        let items = random_photos(0x9a7e, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| {
                let mut state = LayoutState::new();
                engine.build(items, &mut state, None);
                state
            })
        });
    }
    group.finish();
}

fn bench_scored_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("scored_mode");
    let options = LayoutOptions {
        preferred_area: Some(30_000.0),
        ..LayoutOptions::default()
    };
    let engine = LayoutEngine::new(1280, &options);

    for count in [100, 1_000, 10_000] {
        let items = random_photos(0x9a7e, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| {
                let mut state = LayoutState::new();
                engine.build(items, &mut state, None);
                state
            })
        });
    }
    group.finish();
}

fn bench_incremental_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_append");
    let engine = LayoutEngine::new(1280, &LayoutOptions::default());

    let mut items = random_photos(0x9a7e, 10_000);
    let mut warm = LayoutState::new();
    engine.build(&items, &mut warm, None);
    items.extend(random_photos(0x51ab, 100));

    group.bench_function("100_into_10000", |b| {
        b.iter(|| {
            let mut state = warm.clone();
            engine.build(&items, &mut state, None);
            state
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_fixed_mode,
    bench_scored_mode,
    bench_incremental_append
);
criterion_main!(benches);
