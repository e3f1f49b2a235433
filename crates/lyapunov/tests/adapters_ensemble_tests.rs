#![cfg(feature = "dev")]
//! Tests for the multi-start ensemble adapter.
//!
//! ## Test Organization
//!
//! 1. **Execution** - Per-start results, order, agreement with single runs
//! 2. **Validation** - Empty ensembles, bad entries, mixed dimensions

use approx::assert_abs_diff_eq;
use std::cell::Cell;

use lyapunov::internals::api::{Ensemble, HenonMap, LyapunovBuilder as Lyapunov, LyapunovError, Single};

// ============================================================================
// Execution Tests
// ============================================================================

/// Test that every start gets its own run.
///
/// Verifies input order and bit-identical agreement with the single adapter.
#[test]
fn test_ensemble_matches_single_runs() {
    let henon = HenonMap::<f64>::classical();
    let starts = vec![vec![0.0, 0.0], vec![0.1, 0.1], vec![0.2, -0.1]];

    let ensemble = Lyapunov::new()
        .blocks(300)
        .transient_steps(100)
        .adapter(Ensemble)
        .build()
        .unwrap()
        .estimate(&henon, &starts)
        .unwrap();
    let single = Lyapunov::new()
        .blocks(300)
        .transient_steps(100)
        .adapter(Single)
        .build()
        .unwrap();

    assert_eq!(ensemble.len(), 3);
    for (run, start) in ensemble.runs.iter().zip(&starts) {
        let expected = single.estimate(&henon, start).unwrap();
        assert_eq!(run.exponent.to_bits(), expected.exponent.to_bits());
    }
    assert_eq!(ensemble.finite_runs, 3);
}

/// Test agreement across starting points on the attractor.
///
/// Verifies a small spread for the Hénon map.
#[test]
fn test_ensemble_spread_on_attractor() {
    let henon = HenonMap::<f64>::classical();
    let starts: Vec<[f64; 2]> = vec![[0.0, 0.0], [0.3, 0.0], [-0.3, 0.1], [0.5, 0.2]];

    let result = Lyapunov::new()
        .blocks(3_000)
        .transient_steps(500)
        .adapter(Ensemble)
        .build()
        .unwrap()
        .estimate(&henon, &starts)
        .unwrap();

    assert_abs_diff_eq!(result.mean, 0.42, epsilon = 0.04);
    assert!(result.std_dev < 0.05);
    assert!(result.min <= result.mean && result.mean <= result.max);
    assert!(format!("{}", result).contains("Ensemble Summary:"));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of invalid ensembles before any map call.
///
/// Verifies empty ensembles, late bad entries and mixed dimensions.
#[test]
fn test_ensemble_validation_before_map_calls() {
    let calls = Cell::new(0usize);
    let counting = |x: &[f64], next: &mut [f64]| {
        calls.set(calls.get() + 1);
        next.copy_from_slice(x);
    };
    let estimator = Lyapunov::new().blocks(5).adapter(Ensemble).build().unwrap();

    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        estimator.estimate(&counting, &empty),
        Err(LyapunovError::EmptyEnsemble)
    ));

    let late_nan = vec![vec![0.1], vec![0.2], vec![f64::NAN]];
    assert!(matches!(
        estimator.estimate(&counting, &late_nan),
        Err(LyapunovError::InvalidNumericValue(_))
    ));

    let mixed = vec![vec![0.1, 0.2], vec![0.3]];
    assert!(matches!(
        estimator.estimate(&counting, &mixed),
        Err(LyapunovError::DimensionMismatch { expected: 2, got: 1 })
    ));

    assert_eq!(calls.get(), 0);
}

/// Test a shared perturbation direction of the wrong dimension.
#[test]
fn test_ensemble_perturbation_dimension() {
    let estimator = Lyapunov::new()
        .initial_perturbation(vec![1.0, 0.0])
        .adapter(Ensemble)
        .build()
        .unwrap();

    let result = estimator.estimate(&HenonMap::<f64>::classical(), &[[0.0, 0.0, 0.0]]);
    assert!(matches!(
        result,
        Err(LyapunovError::DimensionMismatch { expected: 3, got: 2 })
    ));
}
