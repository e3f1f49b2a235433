//! Single-trajectory adapter with flexible inputs.
//!
//! ## Purpose
//!
//! This module wraps the core single-trajectory estimator so the starting
//! point may be given as a slice, a vector, a fixed-size array or an
//! `ndarray` vector.
//!
//! ## Non-goals
//!
//! * A single run is not parallelized (use the ensemble adapter for many starts).

// External dependencies
use num_traits::Float;

// Export dependencies from lyapunov crate
use lyapunov::internals::adapters::single::{SingleLyapunov, SingleLyapunovBuilder};
use lyapunov::internals::engine::output::LyapunovResult;
use lyapunov::internals::primitives::errors::LyapunovError;
use lyapunov::internals::systems::map::DynamicalMap;

// Internal dependencies
use crate::input::StateInput;

// ============================================================================
// Extended Single Lyapunov Builder
// ============================================================================

/// Builder for a single-trajectory estimator accepting flexible inputs.
#[derive(Debug, Clone)]
pub struct FlexibleSingleLyapunovBuilder<T> {
    /// Base builder from the lyapunov crate
    pub base: SingleLyapunovBuilder<T>,
}

impl<T: Float> Default for FlexibleSingleLyapunovBuilder<T> {
    fn default() -> Self {
        Self {
            base: SingleLyapunovBuilder::default(),
        }
    }
}

impl<T: Float> FlexibleSingleLyapunovBuilder<T> {
    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<FlexibleSingleLyapunov<T>, LyapunovError> {
        Ok(FlexibleSingleLyapunov {
            inner: self.base.build()?,
        })
    }
}

// ============================================================================
// Extended Single Lyapunov Processor
// ============================================================================

/// Single-trajectory estimator accepting flexible inputs.
#[derive(Debug, Clone)]
pub struct FlexibleSingleLyapunov<T> {
    inner: SingleLyapunov<T>,
}

impl<T: Float> FlexibleSingleLyapunov<T> {
    /// Estimate the largest Lyapunov exponent of `map` from `starting_point`.
    pub fn estimate<M, I>(&self, map: &M, starting_point: &I) -> Result<LyapunovResult<T>, LyapunovError>
    where
        M: DynamicalMap<T> + ?Sized,
        I: StateInput<T> + ?Sized,
    {
        self.inner.estimate(map, starting_point.as_state_slice()?)
    }
}
