//! Largest Lyapunov exponent benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Ensemble scalability (4 to 64 starting points)
//! - Run length (blocks and steps per block)
//! - State dimension (coupled logistic lattices)
//! - Reference systems (logistic, Hénon)
//!
//! For serial ensembles, use `FASTLYAPUNOV_MODE=serial cargo bench`.
//! For parallel ensembles, use `FASTLYAPUNOV_MODE=parallel cargo bench` (default).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastLyapunov::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTLYAPUNOV_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

fn logistic(x: &[f64], next: &mut [f64]) {
    next[0] = 4.0 * x[0] * (1.0 - x[0]);
}

/// Diffusively coupled logistic maps on a ring.
fn coupled_lattice(coupling: f64) -> impl Fn(&[f64], &mut [f64]) + Sync {
    move |x: &[f64], next: &mut [f64]| {
        let n = x.len();
        let f = |v: f64| 3.9 * v * (1.0 - v);
        for i in 0..n {
            let left = x[(i + n - 1) % n];
            let right = x[(i + 1) % n];
            next[i] = (1.0 - coupling) * f(x[i]) + 0.5 * coupling * (f(left) + f(right));
        }
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Starting points drawn uniformly from the open unit cube.
fn generate_unit_starts(count: usize, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0.05, 0.95).unwrap();

    (0..count)
        .map(|_| (0..dim).map(|_| dist.sample(&mut rng)).collect())
        .collect()
}

/// Starting points scattered around the origin for the Hénon map.
fn generate_henon_starts(count: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 0.1).unwrap();

    (0..count)
        .map(|_| vec![dist.sample(&mut rng), dist.sample(&mut rng)])
        .collect()
}

/// A random perturbation direction.
fn generate_direction(dim: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();

    (0..dim).map(|_| dist.sample(&mut rng)).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_ensemble_size(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("ensemble_size_{}", mode_name));
    group.sample_size(20);

    for count in [4, 16, 64] {
        group.throughput(Throughput::Elements(count as u64));

        let starts = generate_unit_starts(count, 1, 42);
        let estimator = Lyapunov::new()
            .blocks(2_000)
            .adapter(Ensemble)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("logistic", count), &count, |b, _| {
            b.iter(|| {
                estimator
                    .estimate(&logistic, black_box(&starts))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_run_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_length");
    group.sample_size(30);

    for (blocks, steps) in [(1_000, 10), (10_000, 1), (10_000, 10)] {
        group.throughput(Throughput::Elements((blocks * steps) as u64));

        let estimator = Lyapunov::new()
            .blocks(blocks)
            .part_time_steps(steps)
            .adapter(Single)
            .build()
            .unwrap();

        let id = format!("{}x{}", blocks, steps);
        group.bench_with_input(BenchmarkId::new("logistic", id), &blocks, |b, _| {
            b.iter(|| estimator.estimate(&logistic, black_box(&[0.3])).unwrap())
        });
    }
    group.finish();
}

fn bench_dimension(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("dimension_{}", mode_name));
    group.sample_size(20);

    let lattice = coupled_lattice(0.1);
    for dim in [2, 16, 128] {
        let starts = generate_unit_starts(8, dim, 7);
        let estimator = Lyapunov::new()
            .blocks(500)
            .initial_perturbation(generate_direction(dim, 11))
            .adapter(Ensemble)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("coupled_lattice", dim), &dim, |b, _| {
            b.iter(|| estimator.estimate(&lattice, black_box(&starts)).unwrap())
        });
    }
    group.finish();
}

fn bench_systems(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("systems_{}", mode_name));
    group.sample_size(20);

    let estimator = Lyapunov::new()
        .blocks(2_000)
        .transient_steps(100)
        .return_diagnostics()
        .adapter(Ensemble)
        .parallel(use_parallel)
        .build()
        .unwrap();

    let logistic_map = LogisticMap::fully_chaotic();
    let logistic_starts = generate_unit_starts(16, 1, 3);
    group.bench_function("logistic", |b| {
        b.iter(|| {
            estimator
                .estimate(&logistic_map, black_box(&logistic_starts))
                .unwrap()
        })
    });

    let henon = HenonMap::classical();
    let henon_starts = generate_henon_starts(16, 5);
    group.bench_function("henon", |b| {
        b.iter(|| {
            estimator
                .estimate(&henon, black_box(&henon_starts))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ensemble_size,
    bench_run_length,
    bench_dimension,
    bench_systems,
);
criterion_main!(benches);
