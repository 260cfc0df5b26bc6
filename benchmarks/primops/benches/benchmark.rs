//! Benchmarks for scalar operators and combinators using Criterion.
//!
//! Benchmarks cover:
//! - Scalar operators over a sweep of inputs (sigmoid, log, relu, backward helpers)
//! - Combinator scalability (1K to 1M elements)
//! - Bound-combinator reuse versus rebinding per call
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use primops::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Standard-normal samples scaled to exercise both sigmoid branches.
fn generate_normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 10.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Strictly positive samples, safe for `inv` and `log`.
fn generate_positive_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0.5, 2.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalar_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    let xs = generate_normal_data(10_000, 42);
    let pos = generate_positive_data(10_000, 43);
    group.throughput(Throughput::Elements(xs.len() as u64));

    group.bench_function("sigmoid", |b| {
        b.iter(|| xs.iter().map(|&x| sigmoid(black_box(x))).sum::<f64>())
    });
    group.bench_function("relu", |b| {
        b.iter(|| xs.iter().map(|&x| relu(black_box(x))).sum::<f64>())
    });
    group.bench_function("log", |b| {
        b.iter(|| pos.iter().map(|&x| log(black_box(x))).sum::<f64>())
    });
    group.bench_function("inv_back", |b| {
        b.iter(|| {
            pos.iter()
                .map(|&x| inv_back(black_box(x), 1.0).unwrap_or(0.0))
                .sum::<f64>()
        })
    });
    group.bench_function("log_back", |b| {
        b.iter(|| {
            pos.iter()
                .map(|&x| log_back(black_box(x), 1.0).unwrap_or(0.0))
                .sum::<f64>()
        })
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    group.sample_size(50);

    for size in SIZES {
        let xs = generate_normal_data(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sigmoid", size), &size, |b, _| {
            let squash = transform(sigmoid::<f64>);
            b.iter(|| squash.apply(black_box(&xs)))
        });
        group.bench_with_input(BenchmarkId::new("neg_list", size), &size, |b, _| {
            b.iter(|| neg_list(black_box(&xs)))
        });
    }

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    group.sample_size(50);

    for size in SIZES {
        let a = generate_normal_data(size, 1);
        let d = generate_normal_data(size, 2);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("add_lists", size), &size, |b, _| {
            b.iter(|| add_lists(black_box(&a), black_box(&d)))
        });
        group.bench_with_input(BenchmarkId::new("relu_back", size), &size, |b, _| {
            let grad = combine(relu_back::<f64>);
            b.iter(|| grad.apply(black_box(&a), black_box(&d)))
        });
    }

    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    group.sample_size(50);

    for size in SIZES {
        let xs = generate_positive_data(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sum", size), &size, |b, _| {
            b.iter(|| sum(black_box(&xs)))
        });
        group.bench_with_input(BenchmarkId::new("inv_list", size), &size, |b, _| {
            b.iter(|| inv_list(black_box(&xs)))
        });
    }

    group.finish();
}

fn bench_rebinding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebinding");
    let xs = generate_normal_data(1_000, 99);

    group.bench_function("bound_once", |b| {
        let total = fold(add::<f64>, 0.0);
        b.iter(|| total.apply(black_box(&xs)))
    });
    group.bench_function("bound_per_call", |b| {
        b.iter(|| fold(add::<f64>, 0.0).apply(black_box(&xs)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_operators,
    bench_transform,
    bench_combine,
    bench_fold,
    bench_rebinding,
);
criterion_main!(benches);
