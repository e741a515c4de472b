//! Benchmark for sequence combinators: map, filter, map_paired, fold and sort.
//!
//! Compares cursor-driven pipelines with the equivalent `std::iter` chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::prelude::*;
use std::hint::black_box;

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_filter_map_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map_fold");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("lazyseq", size), &size, |bencher, &size| {
            let pipeline = range(0i64, size)
                .filter(|n| n % 3 == 0)
                .map(|n| n * 2);
            bencher.iter(|| {
                let total = pipeline.fold(0, |accumulator, n| accumulator + n);
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total: i64 = (0i64..size).filter(|n| n % 3 == 0).map(|n| n * 2).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn benchmark_map_paired(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_paired");

    for size in [100, 1_000, 10_000] {
        let right: Vec<i64> = (0..size / 2).collect();
        group.bench_with_input(BenchmarkId::new("shorter_right", size), &size, |bencher, &size| {
            let paired = range(0i64, size).map_paired(from_iterable(&right), |left, right| left * right);
            bencher.iter(|| black_box(paired.to_vec()));
        });
    }

    group.finish();
}

// =============================================================================
// Ordering Benchmarks
// =============================================================================

fn benchmark_sorted_with_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_with_chain");

    for size in [100, 1_000, 10_000] {
        let records: Vec<(u32, u32)> = (0..size).map(|index| (index % 7, index % 13)).collect();
        let comparator = Comparator::chain(
            Comparator::ascending_by(|record: &(u32, u32)| record.0),
            [Comparator::descending_by(|record: &(u32, u32)| record.1)],
        );
        group.bench_with_input(BenchmarkId::new("records", size), &records, |bencher, records| {
            let source = from_iterable(records.as_slice()).map(|record| *record);
            bencher.iter(|| black_box(source.sorted_with(&comparator)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_map_fold,
    benchmark_map_paired,
    benchmark_sorted_with_chain
);

criterion_main!(benches);
