#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the fail-fast checks applied before any map call:
//! - Numeric controls (deviation scale, blocks, steps, dt)
//! - Starting points and perturbation directions
//! - Builder duplicate detection
//!
//! ## Test Organization
//!
//! 1. **Controls** - Bounds on numeric parameters
//! 2. **State Vectors** - Empty, non-finite, dimension checks
//! 3. **Errors** - Display messages

use lyapunov::internals::engine::validator::Validator;
use lyapunov::internals::primitives::errors::LyapunovError;
use lyapunov::internals::primitives::perturbation::Perturbation;

// ============================================================================
// Control Tests
// ============================================================================

/// Test deviation scale bounds.
#[test]
fn test_validate_deviation_scale() {
    assert!(Validator::validate_deviation_scale(1e-10).is_ok());
    assert!(Validator::validate_deviation_scale(0.0).is_err());
    assert!(Validator::validate_deviation_scale(-1.0).is_err());
    assert!(Validator::validate_deviation_scale(f64::NAN).is_err());
}

/// Test block and step counts.
#[test]
fn test_validate_counts() {
    assert!(Validator::validate_blocks(1).is_ok());
    assert_eq!(
        Validator::validate_blocks(0),
        Err(LyapunovError::InvalidBlocks(0))
    );
    assert!(Validator::validate_part_time_steps(1).is_ok());
    assert_eq!(
        Validator::validate_part_time_steps(0),
        Err(LyapunovError::InvalidPartTimeSteps(0))
    );
}

/// Test time step bounds.
#[test]
fn test_validate_dt() {
    assert!(Validator::validate_dt(0.01_f32).is_ok());
    assert!(Validator::validate_dt(0.0_f64).is_err());
    assert!(Validator::validate_dt(f64::INFINITY).is_err());
}

// ============================================================================
// State Vector Tests
// ============================================================================

/// Test starting point checks.
///
/// Verifies rejection of empty and non-finite states.
#[test]
fn test_validate_starting_point() {
    assert!(Validator::validate_starting_point(&[0.1, 0.2]).is_ok());
    assert_eq!(
        Validator::validate_starting_point::<f64>(&[]),
        Err(LyapunovError::EmptyState)
    );
    assert!(matches!(
        Validator::validate_starting_point(&[0.0, f64::INFINITY]),
        Err(LyapunovError::InvalidNumericValue(msg)) if msg.starts_with("starting_point[1]")
    ));
}

/// Test perturbation direction checks.
///
/// Verifies rejection of empty, zero-norm and non-finite directions, and
/// acceptance of finite directions at extreme magnitudes.
#[test]
fn test_validate_direction() {
    assert!(Validator::validate_direction(&[0.0, 1e-3]).is_ok());
    assert!(Validator::validate_direction(&[0.6e-200, -0.8e-200]).is_ok());
    assert!(Validator::validate_direction(&[0.6e200, -0.8e200]).is_ok());
    assert!(matches!(
        Validator::validate_direction::<f64>(&[]),
        Err(LyapunovError::DegeneratePerturbation(_))
    ));
    assert!(matches!(
        Validator::validate_direction(&[0.0, 0.0]),
        Err(LyapunovError::DegeneratePerturbation(_))
    ));
    assert!(matches!(
        Validator::validate_direction(&[f64::NAN]),
        Err(LyapunovError::InvalidNumericValue(_))
    ));
    assert!(Validator::validate_perturbation::<f64>(&Perturbation::Uniform).is_ok());
}

/// Test dimension matching.
///
/// Verifies that only explicit directions fix a dimension.
#[test]
fn test_validate_dimensions() {
    assert!(Validator::validate_dimensions::<f64>(&Perturbation::Uniform, 7).is_ok());
    assert!(Validator::validate_dimensions(&Perturbation::Direction(vec![1.0; 3]), 3).is_ok());
    assert_eq!(
        Validator::validate_dimensions(&Perturbation::Direction(vec![1.0; 2]), 3),
        Err(LyapunovError::DimensionMismatch { expected: 3, got: 2 })
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("dt")),
        Err(LyapunovError::DuplicateParameter { parameter: "dt" })
    );
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test error messages.
///
/// Verifies that messages carry the offending values.
#[test]
fn test_error_display() {
    let msg = LyapunovError::DimensionMismatch { expected: 3, got: 2 }.to_string();
    assert!(msg.contains('3') && msg.contains('2'));

    let msg = LyapunovError::InvalidBlocks(0).to_string();
    assert!(msg.contains("blocks"));

    let msg = LyapunovError::DuplicateParameter { parameter: "blocks" }.to_string();
    assert!(msg.contains("'blocks'"));

    let err: Box<dyn std::error::Error> = Box::new(LyapunovError::EmptyState);
    assert!(err.to_string().contains("empty"));
}
