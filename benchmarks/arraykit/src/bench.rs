//! arraykit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the linear-time hashing solutions (1K to 100K elements)
//! - Strategy comparisons (anagram, top-k, rain water)
//! - Two-pointer scans on sorted and unsorted input
//! - Validation overhead (strict versus permissive solver)

use arraykit::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed integers in `[low, high)`.
fn generate_uniform(size: usize, low: i64, high: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(low..high)).collect()
}

/// Generate a skewed distribution where small values dominate.
fn generate_skewed(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let u: f64 = rng.random();
            (u * u * 1_000.0) as i64
        })
        .collect()
}

/// Generate a random terrain of bar heights.
fn generate_terrain(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut level: i64 = 500;
    (0..size)
        .map(|_| {
            level = (level + rng.random_range(-25..=25)).clamp(0, 1_000);
            level
        })
        .collect()
}

/// Generate a random lowercase string and a shuffled copy of it.
fn generate_anagram_pair(size: usize, seed: u64) -> (String, String) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chars: Vec<char> = (0..size)
        .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
        .collect();
    let s: String = chars.iter().collect();
    chars.shuffle(&mut rng);
    (s, chars.into_iter().collect())
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let nums = generate_uniform(size, -1_000_000, 1_000_000, 42);
        // Values in {-1, 0, 1} keep every product in range
        let signs = generate_uniform(size, -1, 2, 42);

        group.bench_with_input(BenchmarkId::new("has_duplicate", size), &size, |b, _| {
            b.iter(|| has_duplicate(black_box(&nums)))
        });
        group.bench_with_input(BenchmarkId::new("two_sum", size), &size, |b, _| {
            b.iter(|| two_sum(black_box(&nums), black_box(7)))
        });
        group.bench_with_input(
            BenchmarkId::new("longest_consecutive", size),
            &size,
            |b, _| b.iter(|| longest_consecutive(black_box(&nums))),
        );
        group.bench_with_input(
            BenchmarkId::new("product_except_self", size),
            &size,
            |b, _| b.iter(|| product_except_self(black_box(&signs))),
        );
    }
    group.finish();
}

fn bench_anagram_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("anagram");
    group.sample_size(100);

    for size in [100, 10_000] {
        let (s, t) = generate_anagram_pair(size, 42);
        for strategy in [Counting, Sorting] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &size, |b, _| {
                b.iter(|| strategy.apply(black_box(&s), black_box(&t)))
            });
        }
    }
    group.finish();
}

fn bench_top_k_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_frequent");
    group.sample_size(50);

    let nums = generate_skewed(50_000, 42);
    for k in [1, 10, 100] {
        for strategy in [Bucket, Heap] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), k), &k, |b, &k| {
                b.iter(|| strategy.apply(black_box(&nums), k))
            });
        }
    }
    group.finish();
}

fn bench_trap_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("trap");
    group.sample_size(50);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let height = generate_terrain(size, 42);
        for strategy in [TwoPointer, PrefixArrays] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &size, |b, _| {
                b.iter(|| strategy.apply(black_box(&height)))
            });
        }
    }
    group.finish();
}

fn bench_two_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_pointer");
    group.sample_size(50);

    let mut sorted = generate_uniform(100_000, -1_000_000, 1_000_000, 7);
    sorted.sort_unstable();
    let height = generate_terrain(100_000, 7);
    let triples = generate_uniform(2_000, -500, 500, 7);

    group.bench_function("two_sum_sorted", |b| {
        b.iter(|| two_sum_sorted(black_box(&sorted), black_box(3)))
    });
    group.bench_function("max_area", |b| b.iter(|| max_area(black_box(&height))));
    group.bench_function("three_sum", |b| b.iter(|| three_sum(black_box(&triples))));
    group.finish();
}

fn bench_validation_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    group.sample_size(50);

    let height = generate_terrain(100_000, 42);
    let mut sorted = generate_uniform(100_000, 0, 1_000_000, 42);
    sorted.sort_unstable();
    let target = sorted[sorted.len() / 3] + sorted[2 * sorted.len() / 3];

    for mode in [Strict, Permissive] {
        let solver = ArrayKit::new().validation(mode).build().unwrap();
        let label = format!("{:?}", mode);

        group.bench_function(BenchmarkId::new("max_area", &label), |b| {
            b.iter(|| solver.max_area(black_box(&height)).unwrap())
        });
        group.bench_function(BenchmarkId::new("two_sum_sorted", &label), |b| {
            b.iter(|| solver.two_sum_sorted(black_box(&sorted), target).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_anagram_strategies,
    bench_top_k_strategies,
    bench_trap_strategies,
    bench_two_pointer,
    bench_validation_overhead,
);

criterion_main!(benches);
