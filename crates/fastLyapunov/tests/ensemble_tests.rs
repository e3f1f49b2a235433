//! Tests for parallel ensembles and flexible inputs.
//!
//! These tests verify the fastLyapunov extensions on top of the core crate:
//! - Parallel and sequential ensembles agree bit for bit
//! - `ndarray`, vector and array inputs are accepted
//! - Validation still happens before any map call
//!
//! ## Test Organization
//!
//! 1. **Parallel Execution** - Agreement with sequential runs, order
//! 2. **Inputs** - ndarray, Vec, fixed-size arrays, non-contiguous arrays
//! 3. **Validation** - Bad ensembles, call counting with a thread-safe map

use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2, array};
use std::sync::atomic::{AtomicUsize, Ordering};

use fastLyapunov::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn logistic(x: &[f64], next: &mut [f64]) {
    next[0] = 4.0 * x[0] * (1.0 - x[0]);
}

fn logistic_starts(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| vec![0.05 + 0.8 * (i as f64 + 0.37) / (n as f64)])
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fastLyapunov=info,lyapunov=warn")
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Parallel Execution Tests
// ============================================================================

/// Test agreement between parallel and sequential ensembles.
///
/// Verifies bit-identical exponents in input order.
#[test]
fn test_parallel_matches_sequential() {
    init_tracing();
    let starts = logistic_starts(16);

    let parallel = Lyapunov::new()
        .blocks(500)
        .adapter(Ensemble)
        .build()
        .unwrap();
    let sequential = Lyapunov::new()
        .blocks(500)
        .adapter(Ensemble)
        .parallel(false)
        .build()
        .unwrap();
    assert!(parallel.is_parallel());
    assert!(!sequential.is_parallel());

    let a = parallel.estimate(&logistic, &starts).unwrap();
    let b = sequential.estimate(&logistic, &starts).unwrap();

    assert_eq!(a.len(), 16);
    for (x, y) in a.runs.iter().zip(&b.runs) {
        assert_eq!(x.exponent.to_bits(), y.exponent.to_bits());
    }
    assert_eq!(a.mean.to_bits(), b.mean.to_bits());
}

/// Test the ensemble estimate of the logistic map.
///
/// Verifies that every run lands near ln 2.
#[test]
fn test_logistic_ensemble_near_ln2() {
    let result = Lyapunov::new()
        .blocks(5_000)
        .adapter(Ensemble)
        .build()
        .unwrap()
        .estimate(&logistic, &logistic_starts(8))
        .unwrap();

    assert_eq!(result.finite_runs, 8);
    assert_abs_diff_eq!(result.mean, 2f64.ln(), epsilon = 0.03);
    for exponent in result.exponents() {
        assert_abs_diff_eq!(exponent, 2f64.ln(), epsilon = 0.08);
    }
}

/// Test per-run options in an ensemble.
///
/// Verifies that convergence traces are produced for every run.
#[test]
fn test_ensemble_with_convergence() {
    let result = Lyapunov::new()
        .blocks(50)
        .return_convergence(true)
        .adapter(Ensemble)
        .build()
        .unwrap()
        .estimate(&logistic, &logistic_starts(3))
        .unwrap();

    for run in &result.runs {
        let trace = run.convergence.as_ref().unwrap();
        assert_eq!(trace.len(), 50);
        assert_eq!(trace.last().unwrap().to_bits(), run.exponent.to_bits());
    }
}

// ============================================================================
// Input Tests
// ============================================================================

/// Test an ndarray ensemble.
///
/// Verifies that rows are treated as starting points in order.
#[test]
fn test_ndarray_ensemble_rows() {
    let henon = HenonMap::<f64>::classical();
    let rows: Array2<f64> = array![[0.0, 0.0], [0.1, 0.1], [0.2, -0.1]];
    let nested = vec![vec![0.0, 0.0], vec![0.1, 0.1], vec![0.2, -0.1]];

    let estimator = Lyapunov::new()
        .blocks(200)
        .transient_steps(50)
        .adapter(Ensemble)
        .build()
        .unwrap();

    let from_array = estimator.estimate(&henon, &rows).unwrap();
    let from_vec = estimator.estimate(&henon, &nested).unwrap();

    assert_eq!(from_array.exponents().len(), 3);
    for (a, b) in from_array.exponents().iter().zip(from_vec.exponents()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

/// Test fixed-size array ensembles.
#[test]
fn test_fixed_size_array_ensemble() {
    let starts = [[0.2], [0.4], [0.6]];
    let result = Lyapunov::new()
        .blocks(100)
        .adapter(Ensemble)
        .build()
        .unwrap()
        .estimate(&logistic, &starts[..])
        .unwrap();

    assert_eq!(result.len(), 3);
}

/// Test a non-contiguous ndarray ensemble.
///
/// Verifies that a transposed view is rejected instead of copied.
#[test]
fn test_non_contiguous_ensemble_rejected() {
    let data: Array2<f64> = array![[0.0, 0.1, 0.2], [0.0, 0.1, -0.1]];
    let transposed = data.t();

    let result = Lyapunov::new()
        .blocks(10)
        .adapter(Ensemble)
        .build()
        .unwrap()
        .estimate(&HenonMap::<f64>::classical(), &transposed);

    assert!(matches!(result, Err(LyapunovError::InvalidInput(_))));
}

/// Test flexible single-start inputs.
///
/// Verifies identical results for slices, vectors, arrays and ndarray vectors.
#[test]
fn test_single_accepts_flexible_inputs() {
    let henon = HenonMap::<f64>::classical();
    let estimator = Lyapunov::new().blocks(300).adapter(Single).build().unwrap();

    let from_vec = estimator.estimate(&henon, &vec![0.1, 0.1]).unwrap();
    let from_array = estimator.estimate(&henon, &[0.1, 0.1]).unwrap();
    let from_slice = estimator.estimate(&henon, &[0.1, 0.1][..]).unwrap();
    let from_nd = estimator
        .estimate(&henon, &Array1::from(vec![0.1, 0.1]))
        .unwrap();

    for other in [&from_array, &from_slice, &from_nd] {
        assert_eq!(other.exponent.to_bits(), from_vec.exponent.to_bits());
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test validation before parallel execution.
///
/// Verifies that a bad late entry is rejected with zero map calls.
#[test]
fn test_validation_precedes_parallel_runs() {
    let calls = AtomicUsize::new(0);
    let counting = |x: &[f64], next: &mut [f64]| {
        calls.fetch_add(1, Ordering::Relaxed);
        next[0] = 0.5 * x[0];
    };
    let estimator = Lyapunov::new().blocks(10).adapter(Ensemble).build().unwrap();

    let mut starts = logistic_starts(32);
    starts[31] = vec![f64::NAN];
    assert!(matches!(
        estimator.estimate(&counting, &starts),
        Err(LyapunovError::InvalidNumericValue(_))
    ));

    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        estimator.estimate(&counting, &empty),
        Err(LyapunovError::EmptyEnsemble)
    ));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    let result = estimator.estimate(&counting, &logistic_starts(4)).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 4 * 2 * 10 * 10);
    assert_eq!(result.finite_runs, 4);
}

/// Test build-time validation through the extended adapters.
#[test]
fn test_build_errors_propagate() {
    assert!(matches!(
        Lyapunov::<f64>::new().blocks(0).adapter(Ensemble).build(),
        Err(LyapunovError::InvalidBlocks(0))
    ));
    assert!(matches!(
        Lyapunov::<f64>::new().dt(1.0).dt(2.0).adapter(Single).build(),
        Err(LyapunovError::DuplicateParameter { parameter: "dt" })
    ));
}
