//! Input abstractions for starting points.
//!
//! ## Purpose
//!
//! This module lets `estimate` accept starting points in several containers
//! (slices, vectors, fixed-size arrays, ndarray) through two small traits:
//! [`StateInput`] for one starting point and [`EnsembleInput`] for many.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Both traits hand out borrowed slices of the caller's buffers.
//! * **Row-major ensembles**: A 2-D array holds one starting point per row.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected with an error
//!   instead of being copied.
//!
//! ## Invariants
//!
//! * Every returned slice covers one complete state vector.
//! * An ensemble keeps the row order of its container.
//!
//! ## Non-goals
//!
//! * This module does not check values or dimensions (the validator does).

// External dependencies
use ndarray::{ArrayBase, Data, Ix1, Ix2};
use num_traits::Float;

// Export dependencies from lyapunov crate
use lyapunov::internals::primitives::errors::LyapunovError;

// ============================================================================
// Single Starting Point
// ============================================================================

/// Trait for types that can be used as a starting point.
pub trait StateInput<T: Float> {
    /// Borrow the state as a contiguous slice.
    fn as_state_slice(&self) -> Result<&[T], LyapunovError>;
}

impl<T: Float> StateInput<T> for [T] {
    fn as_state_slice(&self) -> Result<&[T], LyapunovError> {
        Ok(self)
    }
}

impl<T: Float, const D: usize> StateInput<T> for [T; D] {
    fn as_state_slice(&self) -> Result<&[T], LyapunovError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> StateInput<T> for Vec<T> {
    fn as_state_slice(&self) -> Result<&[T], LyapunovError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> StateInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_state_slice(&self) -> Result<&[T], LyapunovError> {
        self.as_slice().ok_or_else(|| {
            LyapunovError::InvalidInput("ndarray state must be contiguous in memory".to_string())
        })
    }
}

// ============================================================================
// Ensembles
// ============================================================================

/// Trait for collections of starting points.
pub trait EnsembleInput<T: Float> {
    /// Borrow every starting point as a slice, in order.
    fn as_starting_points(&self) -> Result<Vec<&[T]>, LyapunovError>;
}

impl<T: Float, P: StateInput<T>> EnsembleInput<T> for [P] {
    fn as_starting_points(&self) -> Result<Vec<&[T]>, LyapunovError> {
        self.iter().map(StateInput::as_state_slice).collect()
    }
}

impl<T: Float, P: StateInput<T>> EnsembleInput<T> for Vec<P> {
    fn as_starting_points(&self) -> Result<Vec<&[T]>, LyapunovError> {
        self.as_slice().as_starting_points()
    }
}

impl<T: Float, S> EnsembleInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_starting_points(&self) -> Result<Vec<&[T]>, LyapunovError> {
        let (rows, dim) = self.dim();
        let data = self.as_slice().ok_or_else(|| {
            LyapunovError::InvalidInput(
                "ndarray ensemble must be contiguous in row-major order".to_string(),
            )
        })?;

        if dim == 0 {
            // Zero-width rows; the validator reports them as empty states.
            return Ok(vec![&data[..0]; rows]);
        }
        Ok(data.chunks_exact(dim).collect())
    }
}
