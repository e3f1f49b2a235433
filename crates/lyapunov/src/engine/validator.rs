//! Input validation for estimator configuration and state vectors.
//!
//! ## Purpose
//!
//! This module provides the validation functions that guard the estimator.
//! Every check runs before the dynamical map is called for the first time,
//! so an invalid request never produces partial work.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Deviation scale and dt positive and finite; block and step counts at least 1.
//! * **Shape Checks**: Non-empty starting point, perturbation matching its dimension.
//! * **Finite Checks**: Starting point and perturbation direction contain no NaN/Inf.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not guard against zero divergence during the run.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::vector::l2_norm;
use crate::primitives::errors::LyapunovError;
use crate::primitives::perturbation::Perturbation;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator configuration and state vectors.
///
/// All methods return `Result<(), LyapunovError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the perturbation magnitude.
    pub fn validate_deviation_scale<T: Float>(scale: T) -> Result<(), LyapunovError> {
        if !scale.is_finite() || scale <= T::zero() {
            return Err(LyapunovError::InvalidDeviationScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of renormalization blocks.
    pub fn validate_blocks(blocks: usize) -> Result<(), LyapunovError> {
        if blocks < 1 {
            return Err(LyapunovError::InvalidBlocks(blocks));
        }
        Ok(())
    }

    /// Validate the number of map calls per block.
    pub fn validate_part_time_steps(steps: usize) -> Result<(), LyapunovError> {
        if steps < 1 {
            return Err(LyapunovError::InvalidPartTimeSteps(steps));
        }
        Ok(())
    }

    /// Validate the physical duration of one map call.
    pub fn validate_dt<T: Float>(dt: T) -> Result<(), LyapunovError> {
        if !dt.is_finite() || dt <= T::zero() {
            return Err(LyapunovError::InvalidTimeStep(
                dt.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an explicit perturbation direction on its own.
    ///
    /// # Notes
    ///
    /// * Entries must be finite.
    /// * The direction must have a positive norm so it can be normalized.
    pub fn validate_direction<T: Float>(direction: &[T]) -> Result<(), LyapunovError> {
        if direction.is_empty() {
            return Err(LyapunovError::DegeneratePerturbation(0.0));
        }
        Self::validate_finite(direction, "initial_perturbation")?;

        let norm = l2_norm(direction);
        if !norm.is_finite() || norm <= T::zero() {
            return Err(LyapunovError::DegeneratePerturbation(
                norm.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a perturbation choice, including its direction when explicit.
    pub fn validate_perturbation<T: Float>(
        perturbation: &Perturbation<T>,
    ) -> Result<(), LyapunovError> {
        match perturbation {
            Perturbation::Uniform => Ok(()),
            Perturbation::Direction(direction) => Self::validate_direction(direction),
        }
    }

    // ========================================================================
    // State Validation
    // ========================================================================

    /// Validate a starting point.
    pub fn validate_starting_point<T: Float>(start: &[T]) -> Result<(), LyapunovError> {
        if start.is_empty() {
            return Err(LyapunovError::EmptyState);
        }
        Self::validate_finite(start, "starting_point")
    }

    /// Validate that a perturbation fits a state of dimension `dim`.
    pub fn validate_dimensions<T>(
        perturbation: &Perturbation<T>,
        dim: usize,
    ) -> Result<(), LyapunovError> {
        match perturbation.dimension() {
            Some(got) if got != dim => Err(LyapunovError::DimensionMismatch { expected: dim, got }),
            _ => Ok(()),
        }
    }

    /// Validate that all values are finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), LyapunovError> {
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(LyapunovError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LyapunovError> {
        if let Some(param) = duplicate_param {
            return Err(LyapunovError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
