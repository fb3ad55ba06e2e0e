//! Criterion micro-benchmarks for single-generation steps.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifegrid_bench::{block_field, glider_fleet, soup_profile};
use lifegrid_core::Coordinate;

/// Benchmark: enumerate the neighbourhood of 10K coordinates.
fn bench_neighbors_10k(c: &mut Criterion) {
    c.bench_function("neighbors_10k", |b| {
        b.iter(|| {
            for x in 0..100i64 {
                for y in 0..100i64 {
                    let n = Coordinate::new(x, y).neighbors();
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: one step of a 128x128 soup.
fn bench_step_soup_128(c: &mut Criterion) {
    let board = soup_profile(42, 128).unwrap();

    c.bench_function("step_soup_128", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.next_generation()),
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: one step of 100 gliders.
fn bench_step_glider_fleet(c: &mut Criterion) {
    let board = glider_fleet(100, 8).unwrap();

    c.bench_function("step_glider_fleet_100", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.next_generation()),
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: one frozen step of a stable 32x32 block field.
fn bench_step_block_field_frozen(c: &mut Criterion) {
    let board = block_field(32).unwrap();

    c.bench_function("step_block_field_frozen", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.next_generation_or_freeze()),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_neighbors_10k,
    bench_step_soup_128,
    bench_step_glider_fleet,
    bench_step_block_field_frozen
);
criterion_main!(benches);
