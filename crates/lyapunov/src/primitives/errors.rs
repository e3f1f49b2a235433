//! Error types for Lyapunov exponent estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running the estimator: invalid numeric controls, malformed state
//! vectors, and perturbation directions that cannot be normalized.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., got vs. expected dimension).
//! * **Deferred**: Duplicate builder parameters are recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Non-positive deviation scale, block count, step count or time step.
//! 2. **Shape errors**: Empty state vectors, perturbation dimension mismatches.
//! 3. **Numeric errors**: Non-finite entries in the starting point or perturbation direction.
//!
//! ## Invariants
//!
//! * Every error is raised before the first call to the dynamical map.
//! * Numeric values in errors are reported as `f64` regardless of the working precision.
//!
//! ## Non-goals
//!
//! * Numerical degeneracy during the run (zero divergence) is not an error;
//!   it propagates as a non-finite estimate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Lyapunov exponent estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum LyapunovError {
    /// The starting point has no components; the state dimension must be at least 1.
    EmptyState,

    /// An ensemble was requested with no starting points.
    EmptyEnsemble,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The perturbation magnitude must be positive and finite.
    InvalidDeviationScale(f64),

    /// At least one renormalization block is required.
    InvalidBlocks(usize),

    /// At least one map iteration per block is required.
    InvalidPartTimeSteps(usize),

    /// The physical duration of one map iteration must be positive and finite.
    InvalidTimeStep(f64),

    /// A perturbation direction or ensemble member has the wrong dimension.
    DimensionMismatch {
        /// Dimension of the (first) starting point.
        expected: usize,
        /// Dimension actually supplied.
        got: usize,
    },

    /// The perturbation direction cannot be normalized (zero or non-finite norm).
    DegeneratePerturbation(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LyapunovError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyState => write!(f, "Starting point is empty (dimension must be >= 1)"),
            Self::EmptyEnsemble => write!(f, "Ensemble contains no starting points"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidDeviationScale(scale) => {
                write!(f, "Invalid deviation_scale: {scale} (must be > 0 and finite)")
            }
            Self::InvalidBlocks(n) => {
                write!(f, "Invalid number of blocks: {n} (must be >= 1)")
            }
            Self::InvalidPartTimeSteps(steps) => {
                write!(f, "Invalid part_time_steps: {steps} (must be >= 1)")
            }
            Self::InvalidTimeStep(dt) => {
                write!(f, "Invalid dt: {dt} (must be > 0 and finite)")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: expected {expected} components, got {got}"
                )
            }
            Self::DegeneratePerturbation(norm) => {
                write!(
                    f,
                    "Degenerate perturbation direction: norm {norm} (must be > 0 and finite)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LyapunovError {}
