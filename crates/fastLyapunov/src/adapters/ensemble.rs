//! Ensemble adapter with parallel execution.
//!
//! ## Purpose
//!
//! This module extends the core ensemble adapter: the same configuration is
//! run from many starting points, distributed over all CPU cores, and the
//! exponents are summarized.
//!
//! ## Design notes
//!
//! * **Validation**: Reuses the core validation; every starting point is
//!   checked before any map call.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastLyapunov extension).
//! * **Fallback**: Runs sequentially when the `cpu` feature is disabled or
//!   `parallel(false)` was requested.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Results keep the order of the starting points.
//! * Parallel and sequential execution return bit-identical results.
//!
//! ## Non-goals
//!
//! * This adapter does not choose starting points (the caller supplies them).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::estimate_parallel;

// External dependencies
use num_traits::Float;

// Export dependencies from lyapunov crate
use lyapunov::internals::adapters::ensemble::{EnsembleLyapunov, EnsembleLyapunovBuilder};
use lyapunov::internals::engine::executor::LyapunovConfig;
use lyapunov::internals::engine::output::{EnsembleResult, LyapunovResult};
use lyapunov::internals::primitives::errors::LyapunovError;
use lyapunov::internals::systems::map::DynamicalMap;

// Internal dependencies
use crate::engine::executor::estimate_sequential;
use crate::input::EnsembleInput;

// ============================================================================
// Extended Ensemble Lyapunov Builder
// ============================================================================

/// Builder for an ensemble estimator with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelEnsembleLyapunovBuilder<T> {
    /// Base builder from the lyapunov crate
    pub base: EnsembleLyapunovBuilder<T>,
}

impl<T: Float> Default for ParallelEnsembleLyapunovBuilder<T> {
    fn default() -> Self {
        Self {
            base: EnsembleLyapunovBuilder::default(),
        }
    }
}

impl<T: Float> ParallelEnsembleLyapunovBuilder<T> {
    /// Enable or disable parallel execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<ParallelEnsembleLyapunov<T>, LyapunovError> {
        let parallel = self.base.parallel.unwrap_or(true);
        let inner = self.base.build()?;

        Ok(ParallelEnsembleLyapunov { inner, parallel })
    }
}

// ============================================================================
// Extended Ensemble Lyapunov Processor
// ============================================================================

/// Ensemble estimator with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelEnsembleLyapunov<T> {
    inner: EnsembleLyapunov<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelEnsembleLyapunov<T> {
    /// Estimate from every starting point in `starts`.
    pub fn estimate<M, I>(&self, map: &M, starts: &I) -> Result<EnsembleResult<T>, LyapunovError>
    where
        M: DynamicalMap<T> + Sync + ?Sized,
        I: EnsembleInput<T> + ?Sized,
    {
        let starts = starts.as_starting_points()?;
        EnsembleLyapunov::validate_starts(self.inner.config(), &starts)?;

        let _span = tracing::info_span!(
            "lyapunov_ensemble",
            runs = starts.len(),
            parallel = self.parallel
        )
        .entered();

        let runs = self.dispatch(map, &starts)?;
        let result = EnsembleResult::from_runs(runs);
        tracing::info!(
            finite_runs = result.finite_runs,
            mean = result.mean.to_f64().unwrap_or(f64::NAN),
            "ensemble finished"
        );

        Ok(result)
    }

    #[cfg(feature = "cpu")]
    fn dispatch<M>(&self, map: &M, starts: &[&[T]]) -> Result<Vec<LyapunovResult<T>>, LyapunovError>
    where
        M: DynamicalMap<T> + Sync + ?Sized,
    {
        if self.parallel {
            estimate_parallel(self.inner.single(), map, starts)
        } else {
            estimate_sequential(self.inner.single(), map, starts)
        }
    }

    #[cfg(not(feature = "cpu"))]
    fn dispatch<M>(&self, map: &M, starts: &[&[T]]) -> Result<Vec<LyapunovResult<T>>, LyapunovError>
    where
        M: DynamicalMap<T> + Sync + ?Sized,
    {
        estimate_sequential(self.inner.single(), map, starts)
    }

    /// Whether runs are distributed over the thread pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The validated per-run configuration.
    pub fn config(&self) -> &LyapunovConfig<T> {
        self.inner.config()
    }
}
