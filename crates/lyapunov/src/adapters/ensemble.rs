//! Ensemble adapter for multi-start estimation.
//!
//! ## Purpose
//!
//! This module runs the single-trajectory estimator from several starting
//! points with one shared configuration and summarizes the exponents. Runs are
//! independent of each other; this adapter executes them one after another.
//!
//! ## Design notes
//!
//! * **Validate all, then run**: Every starting point is checked before the
//!   first map call, so a bad entry late in the list never wastes work.
//! * **Shared dimension**: All starting points must have the dimension of the first.
//! * **Order**: Results are returned in input order.
//!
//! ## Non-goals
//!
//! * This adapter does not run in parallel (see `fastLyapunov`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::single::{SingleLyapunov, SingleLyapunovBuilder};
use crate::engine::executor::LyapunovConfig;
use crate::engine::output::EnsembleResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::LyapunovError;
use crate::primitives::perturbation::Perturbation;
use crate::systems::map::DynamicalMap;

// ============================================================================
// Ensemble Lyapunov Builder
// ============================================================================

/// Builder for a multi-start estimator.
#[derive(Debug, Clone)]
pub struct EnsembleLyapunovBuilder<T> {
    /// Per-run configuration.
    pub base: SingleLyapunovBuilder<T>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,
}

impl<T: Float> Default for EnsembleLyapunovBuilder<T> {
    fn default() -> Self {
        Self {
            base: SingleLyapunovBuilder::default(),
            parallel: None,
        }
    }
}

impl<T: Float> EnsembleLyapunovBuilder<T> {
    /// Set the perturbation magnitude.
    pub fn deviation_scale(mut self, scale: T) -> Self {
        self.base = self.base.deviation_scale(scale);
        self
    }

    /// Set the number of renormalization blocks.
    pub fn blocks(mut self, blocks: usize) -> Self {
        self.base = self.base.blocks(blocks);
        self
    }

    /// Set the number of map calls per block.
    pub fn part_time_steps(mut self, steps: usize) -> Self {
        self.base = self.base.part_time_steps(steps);
        self
    }

    /// Set the duration of one map call.
    pub fn dt(mut self, dt: T) -> Self {
        self.base = self.base.dt(dt);
        self
    }

    /// Set the initial perturbation direction shared by all runs.
    pub fn initial_perturbation(mut self, direction: impl Into<Perturbation<T>>) -> Self {
        self.base = self.base.initial_perturbation(direction);
        self
    }

    /// Set the number of transient map calls.
    pub fn transient_steps(mut self, steps: usize) -> Self {
        self.base = self.base.transient_steps(steps);
        self
    }

    /// Return the convergence trace of every run.
    pub fn return_convergence(mut self, enabled: bool) -> Self {
        self.base = self.base.return_convergence(enabled);
        self
    }

    /// Keep the raw log-divergences of every run.
    pub fn return_log_divergence(mut self) -> Self {
        self.base = self.base.return_log_divergence();
        self
    }

    /// Compute convergence diagnostics for every run.
    pub fn return_diagnostics(mut self) -> Self {
        self.base = self.base.return_diagnostics();
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<EnsembleLyapunov<T>, LyapunovError> {
        Ok(EnsembleLyapunov {
            single: self.base.build()?,
        })
    }
}

// ============================================================================
// Ensemble Lyapunov Processor
// ============================================================================

/// Validated multi-start estimator.
#[derive(Debug, Clone)]
pub struct EnsembleLyapunov<T> {
    single: SingleLyapunov<T>,
}

impl<T: Float> EnsembleLyapunov<T> {
    /// Estimate from every starting point in `starts`, sequentially.
    pub fn estimate<M, S>(&self, map: &M, starts: &[S]) -> Result<EnsembleResult<T>, LyapunovError>
    where
        M: DynamicalMap<T> + ?Sized,
        S: AsRef<[T]>,
    {
        Self::validate_starts(self.config(), starts)?;

        let runs = starts
            .iter()
            .map(|start| self.single.estimate(map, start.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EnsembleResult::from_runs(runs))
    }

    /// Check every starting point against the configuration.
    pub fn validate_starts<S: AsRef<[T]>>(
        config: &LyapunovConfig<T>,
        starts: &[S],
    ) -> Result<(), LyapunovError> {
        let first = starts.first().ok_or(LyapunovError::EmptyEnsemble)?;
        let dim = first.as_ref().len();

        for start in starts {
            let start = start.as_ref();
            Validator::validate_starting_point(start)?;
            if start.len() != dim {
                return Err(LyapunovError::DimensionMismatch {
                    expected: dim,
                    got: start.len(),
                });
            }
        }

        Validator::validate_dimensions(&config.perturbation, dim)
    }

    /// The single-run estimator applied to every start.
    pub fn single(&self) -> &SingleLyapunov<T> {
        &self.single
    }

    /// The validated configuration.
    pub fn config(&self) -> &LyapunovConfig<T> {
        self.single.config()
    }
}
