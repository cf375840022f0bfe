//! Benchmark for chained views vs eager `Vec` transforms.
//!
//! Compares building and reading derived views against performing the same
//! transformation eagerly on a standard `Vec`.

use collection_views::view::ImmutableVector;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// slice/reverse/map Benchmark
// =============================================================================

fn benchmark_derive_and_read(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("derive_and_read");

    for size in [100, 1000, 10000] {
        let elements: Vec<i64> = (0..size).collect();
        let vector = ImmutableVector::copy_from(&elements);

        // Lazy view chain, every element read once
        group.bench_with_input(
            BenchmarkId::new("ImmutableVector", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let view = vector.drop(1).reverse().map(|element| element * 3);
                    black_box(view.iter().sum::<i64>())
                });
            },
        );

        // Eager transform through intermediate Vecs
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut dropped: Vec<i64> = elements[1..].to_vec();
                dropped.reverse();
                let mapped: Vec<i64> = dropped.into_iter().map(|element| element * 3).collect();
                black_box(mapped.iter().sum::<i64>())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Map Fusion Benchmark
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_chain");
    let vector = ImmutableVector::copy_from_iter(0..1000_i64);

    for depth in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::new("fused", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut view = vector.clone();
                for _ in 0..depth {
                    view = view.map(|element| element + 1);
                }
                black_box(view.get(black_box(500)))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Copy Benchmark
// =============================================================================

fn benchmark_copy(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("copy");

    for size in [100, 1000, 10000] {
        let elements: Vec<i64> = (0..size).collect();
        let vector = ImmutableVector::copy_from(&elements);
        let mapped = vector.map(|element| element * 2);

        // Vouched source, reused without copying
        group.bench_with_input(BenchmarkId::new("reuse_vouched", size), &size, |bencher, _| {
            bencher.iter(|| black_box(ImmutableVector::copy_from_sequence(&vector)));
        });

        // Mapped source, materialized
        group.bench_with_input(BenchmarkId::new("materialize_mapped", size), &size, |bencher, _| {
            bencher.iter(|| black_box(ImmutableVector::copy_from_sequence(&mapped)));
        });

        group.bench_with_input(BenchmarkId::new("copy_from_slice", size), &size, |bencher, _| {
            bencher.iter(|| black_box(ImmutableVector::copy_from(&elements)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_derive_and_read,
    benchmark_map_chain,
    benchmark_copy
);
criterion_main!(benches);
