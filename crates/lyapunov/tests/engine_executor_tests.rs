#![cfg(feature = "dev")]
//! Tests for the two-trajectory execution engine.
//!
//! These tests verify the low-level executor used by every adapter:
//! - Configuration defaults and validation
//! - Perturbation resolution
//! - Block loop bookkeeping (lengths, call counts, renormalization distance)
//! - Time step resolution
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Defaults, validation, dt resolution
//! 2. **Perturbation** - Uniform and explicit directions
//! 3. **Block Loop** - Log-divergences, renormalization, non-finite tracking

use approx::assert_relative_eq;
use std::cell::Cell;

use lyapunov::internals::engine::executor::{LyapunovConfig, LyapunovExecutor};
use lyapunov::internals::engine::output::OutputMode;
use lyapunov::internals::math::vector::l2_norm;
use lyapunov::internals::primitives::buffer::TrajectoryBuffer;
use lyapunov::internals::primitives::errors::LyapunovError;
use lyapunov::internals::primitives::perturbation::Perturbation;
use lyapunov::internals::systems::map::Timed;
use lyapunov::internals::systems::reference::{HenonMap, LinearScaling};

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test configuration defaults.
///
/// Verifies the documented default controls.
#[test]
fn test_config_defaults() {
    let config = LyapunovConfig::<f64>::default();

    assert_relative_eq!(config.deviation_scale, 1e-10);
    assert_eq!(config.blocks, 100_000);
    assert_eq!(config.part_time_steps, 10);
    assert_eq!(config.dt, None);
    assert_eq!(config.perturbation, Perturbation::Uniform);
    assert_eq!(config.transient_steps, 0);
    assert_eq!(config.output_mode, OutputMode::Exponent);
    assert!(config.validate().is_ok());
}

/// Test dt resolution order.
///
/// Verifies explicit dt, then the map hint, then 1.
#[test]
fn test_resolve_dt_precedence() {
    let plain = LinearScaling::new(0.5);
    let timed = Timed::new(LinearScaling::new(0.5), 0.05);

    let mut config = LyapunovConfig::<f64>::default();
    assert_relative_eq!(config.resolve_dt(&plain).unwrap(), 1.0);
    assert_relative_eq!(config.resolve_dt(&timed).unwrap(), 0.05);

    config.dt = Some(2.0);
    assert_relative_eq!(config.resolve_dt(&timed).unwrap(), 2.0);
}

/// Test rejection of a non-positive time step hint.
///
/// Verifies that a bad hint fails before the map is called.
#[test]
fn test_invalid_time_step_hint_rejected() {
    let calls = Cell::new(0usize);
    let counting = |x: &[f64], next: &mut [f64]| {
        calls.set(calls.get() + 1);
        next.copy_from_slice(x);
    };
    let timed = Timed::new(counting, -1.0);

    let config = LyapunovConfig {
        blocks: 3,
        ..Default::default()
    };
    let result = LyapunovExecutor::run_with_config(&timed, &[1.0], &config);

    assert!(matches!(result, Err(LyapunovError::InvalidTimeStep(_))));
    assert_eq!(calls.get(), 0);
}

// ============================================================================
// Perturbation Tests
// ============================================================================

/// Test the uniform perturbation.
///
/// Verifies equal components with norm equal to the scale.
#[test]
fn test_resolve_uniform_perturbation() {
    let offset = LyapunovExecutor::resolve_perturbation(&Perturbation::Uniform, 4, 1e-3).unwrap();

    assert_eq!(offset.len(), 4);
    for &v in &offset {
        assert_relative_eq!(v, 0.5e-3, epsilon = 1e-15);
    }
    assert_relative_eq!(l2_norm(&offset), 1e-3, epsilon = 1e-15);
}

/// Test an explicit perturbation direction.
///
/// Verifies that the orientation is kept and the norm equals the scale.
#[test]
fn test_resolve_explicit_perturbation() {
    let p = Perturbation::Direction(vec![3.0, -4.0]);
    let offset = LyapunovExecutor::resolve_perturbation(&p, 2, 10.0).unwrap();

    assert_relative_eq!(offset[0], 6.0, epsilon = 1e-12);
    assert_relative_eq!(offset[1], -8.0, epsilon = 1e-12);
}

/// Test perturbation dimension checks.
///
/// Verifies that a direction of the wrong length is rejected.
#[test]
fn test_resolve_perturbation_dimension_mismatch() {
    let p = Perturbation::Direction(vec![1.0, 2.0, 3.0]);
    let err = LyapunovExecutor::resolve_perturbation(&p, 2, 1.0).unwrap_err();

    assert_eq!(err, LyapunovError::DimensionMismatch { expected: 2, got: 3 });
}

// ============================================================================
// Block Loop Tests
// ============================================================================

/// Test the output bookkeeping of a run.
///
/// Verifies N log-divergences and the reported call count.
#[test]
fn test_run_output_shape() {
    let config = LyapunovConfig::<f64> {
        blocks: 25,
        part_time_steps: 4,
        transient_steps: 3,
        ..Default::default()
    };

    let output =
        LyapunovExecutor::run_with_config(&HenonMap::<f64>::classical(), &[0.0, 0.0], &config).unwrap();

    assert_eq!(output.log_divergence.len(), 25);
    assert_eq!(output.iterator_calls, 3 + 2 * 25 * 4);
    assert_relative_eq!(output.dt, 1.0);
    assert!(output.first_non_finite_block.is_none());
}

/// Test renormalization distance.
///
/// Verifies that after every block the trajectories are `deviation_scale` apart.
#[test]
fn test_renormalization_restores_scale() {
    let map = HenonMap::<f64>::classical();
    let scale = 1e-8_f64;
    let offset = LyapunovExecutor::resolve_perturbation(&Perturbation::Uniform, 2, scale).unwrap();

    let mut buffer = TrajectoryBuffer::new(2);
    buffer.seed(&[0.1, 0.1], &offset);

    let mut log_div = Vec::new();
    for _ in 0..20 {
        LyapunovExecutor::run_blocks(&map, &mut buffer, scale, 1, 5, &mut log_div);
        let gap: Vec<f64> = buffer
            .perturbed
            .iter()
            .zip(&buffer.reference)
            .map(|(p, r)| p - r)
            .collect();
        assert_relative_eq!(l2_norm(&gap), scale, max_relative = 1e-6);
    }
    assert_eq!(log_div.len(), 20);
}

/// Test the per-block log-divergence of a linear map.
///
/// Verifies `ln(c^part_time_steps)` for every block of the map x -> c x.
#[test]
fn test_linear_map_log_divergence() {
    let config = LyapunovConfig::<f64> {
        blocks: 10,
        part_time_steps: 3,
        ..Default::default()
    };

    let output =
        LyapunovExecutor::run_with_config(&LinearScaling::new(2.0), &[0.0, 0.0], &config).unwrap();

    for &v in &output.log_divergence {
        assert_relative_eq!(v, 3.0 * 2f64.ln(), epsilon = 1e-9);
    }
}

/// Test the settling of transients.
///
/// Verifies that the returned state is the map applied `steps` times.
#[test]
fn test_settle_transient() {
    let mut buffer = TrajectoryBuffer::new(1);
    let state =
        LyapunovExecutor::settle_transient(&LinearScaling::new(3.0_f64), &[1.0], 4, &mut buffer);

    assert_relative_eq!(state[0], 81.0);
}

/// Test tracking of the first non-finite block.
///
/// Verifies that a map which collapses after a while is reported at the right block.
#[test]
fn test_first_non_finite_block_reported() {
    let calls = Cell::new(0usize);
    // Expands until call 40, then maps every state to the same point.
    let collapsing = |x: &[f64], next: &mut [f64]| {
        let n = calls.get();
        calls.set(n + 1);
        next[0] = if n < 40 { 1.5 * x[0] } else { 0.25 };
    };

    let config = LyapunovConfig {
        blocks: 6,
        part_time_steps: 5,
        ..Default::default()
    };
    let output = LyapunovExecutor::run_with_config(&collapsing, &[1.0], &config).unwrap();

    // Blocks 0..3 make 2 * 5 calls each; block 4 starts at call 40.
    assert_eq!(output.first_non_finite_block, Some(4));
    assert!(output.log_divergence[..4].iter().all(|v| v.is_finite()));
    assert!(!output.log_divergence[4].is_finite());
}
