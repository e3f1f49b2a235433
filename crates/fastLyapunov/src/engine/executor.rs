//! Ensemble execution across starting points.
//!
//! ## Purpose
//!
//! This module runs one validated single-trajectory estimator from many
//! starting points. Runs share nothing but the map and the configuration, so
//! they are distributed over the `rayon` thread pool as independent tasks.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Determinism**: Every run is computed exactly as it would be sequentially;
//!   the parallel and sequential strategies return bit-identical results.
//! * **Order**: Results are collected in input order.
//!
//! ## Invariants
//!
//! * Starting points have been validated before either strategy is called.
//! * The map is shared by reference and must therefore be `Sync`.
//!
//! ## Non-goals
//!
//! * Parallelism inside a single run (the two trajectories are inherently sequential).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from lyapunov crate
use lyapunov::internals::adapters::single::SingleLyapunov;
use lyapunov::internals::engine::output::LyapunovResult;
use lyapunov::internals::primitives::errors::LyapunovError;
use lyapunov::internals::systems::map::DynamicalMap;

/// Run `estimator` from every starting point on the `rayon` thread pool.
#[cfg(feature = "cpu")]
pub fn estimate_parallel<T, M>(
    estimator: &SingleLyapunov<T>,
    map: &M,
    starts: &[&[T]],
) -> Result<Vec<LyapunovResult<T>>, LyapunovError>
where
    T: Float + Send + Sync,
    M: DynamicalMap<T> + Sync + ?Sized,
{
    starts
        .par_iter()
        .map(|start| estimator.estimate(map, start))
        .collect()
}

/// Run `estimator` from every starting point on the calling thread.
pub fn estimate_sequential<T, M>(
    estimator: &SingleLyapunov<T>,
    map: &M,
    starts: &[&[T]],
) -> Result<Vec<LyapunovResult<T>>, LyapunovError>
where
    T: Float,
    M: DynamicalMap<T> + ?Sized,
{
    starts
        .iter()
        .map(|start| estimator.estimate(map, start))
        .collect()
}
