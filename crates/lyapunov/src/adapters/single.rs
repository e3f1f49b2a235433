//! Single-trajectory adapter for largest Lyapunov exponent estimation.
//!
//! ## Purpose
//!
//! This module provides the standard execution adapter: one dynamical map,
//! one starting point, one estimate.
//!
//! ## Design notes
//!
//! * **Two-phase validation**: Controls are validated at `build()`, the
//!   starting point at `estimate()`; both happen before the first map call.
//! * **Reusable**: A built [`SingleLyapunov`] can estimate any number of
//!   maps and starting points.
//! * **Delegation**: Delegates the run to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Identical inputs produce bit-identical results.
//! * The starting point is never modified.
//!
//! ## Non-goals
//!
//! * This adapter does not run several starting points (use the ensemble adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{LyapunovConfig, LyapunovExecutor};
use crate::engine::output::{LyapunovResult, OutputMode};
use crate::engine::validator::Validator;
use crate::primitives::errors::LyapunovError;
use crate::primitives::perturbation::Perturbation;
use crate::systems::map::DynamicalMap;

// ============================================================================
// Single Lyapunov Builder
// ============================================================================

/// Builder for a single-trajectory estimator.
#[derive(Debug, Clone)]
pub struct SingleLyapunovBuilder<T> {
    /// Perturbation magnitude kept after every renormalization
    pub deviation_scale: T,

    /// Number of renormalization blocks
    pub blocks: usize,

    /// Map calls per block
    pub part_time_steps: usize,

    /// Step duration; `None` defers to the map
    pub dt: Option<T>,

    /// Initial perturbation direction
    pub perturbation: Perturbation<T>,

    /// Map calls discarded before the perturbation is placed
    pub transient_steps: usize,

    /// Whether to return the running estimate after every block
    pub return_convergence: bool,

    /// Whether to return the raw log-divergences
    pub return_log_divergence: bool,

    /// Whether to compute convergence diagnostics
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SingleLyapunovBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SingleLyapunovBuilder<T> {
    /// Create a new builder with default parameters.
    fn new() -> Self {
        let defaults = LyapunovConfig::default();
        Self {
            deviation_scale: defaults.deviation_scale,
            blocks: defaults.blocks,
            part_time_steps: defaults.part_time_steps,
            dt: None,
            perturbation: Perturbation::Uniform,
            transient_steps: 0,
            return_convergence: false,
            return_log_divergence: false,
            return_diagnostics: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the perturbation magnitude.
    pub fn deviation_scale(mut self, scale: T) -> Self {
        self.deviation_scale = scale;
        self
    }

    /// Set the number of renormalization blocks.
    pub fn blocks(mut self, blocks: usize) -> Self {
        self.blocks = blocks;
        self
    }

    /// Set the number of map calls per block.
    pub fn part_time_steps(mut self, steps: usize) -> Self {
        self.part_time_steps = steps;
        self
    }

    /// Set the duration of one map call.
    pub fn dt(mut self, dt: T) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Set the initial perturbation direction.
    pub fn initial_perturbation(mut self, direction: impl Into<Perturbation<T>>) -> Self {
        self.perturbation = direction.into();
        self
    }

    /// Set the number of transient map calls.
    pub fn transient_steps(mut self, steps: usize) -> Self {
        self.transient_steps = steps;
        self
    }

    /// Return the convergence trace instead of only the scalar.
    pub fn return_convergence(mut self, enabled: bool) -> Self {
        self.return_convergence = enabled;
        self
    }

    /// Keep the raw per-block log-divergences.
    pub fn return_log_divergence(mut self) -> Self {
        self.return_log_divergence = true;
        self
    }

    /// Compute convergence diagnostics.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = true;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Engine configuration described by this builder.
    pub fn to_config(&self) -> LyapunovConfig<T> {
        LyapunovConfig {
            deviation_scale: self.deviation_scale,
            blocks: self.blocks,
            part_time_steps: self.part_time_steps,
            dt: self.dt,
            perturbation: self.perturbation.clone(),
            transient_steps: self.transient_steps,
            output_mode: if self.return_convergence {
                OutputMode::Convergence
            } else {
                OutputMode::Exponent
            },
            return_log_divergence: self.return_log_divergence,
            return_diagnostics: self.return_diagnostics,
        }
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<SingleLyapunov<T>, LyapunovError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = self.to_config();
        config.validate()?;

        Ok(SingleLyapunov { config })
    }
}

// ============================================================================
// Single Lyapunov Processor
// ============================================================================

/// Validated single-trajectory estimator.
#[derive(Debug, Clone)]
pub struct SingleLyapunov<T> {
    config: LyapunovConfig<T>,
}

impl<T: Float> SingleLyapunov<T> {
    /// Estimate the largest Lyapunov exponent of `map` starting from `starting_point`.
    pub fn estimate<M>(&self, map: &M, starting_point: &[T]) -> Result<LyapunovResult<T>, LyapunovError>
    where
        M: DynamicalMap<T> + ?Sized,
    {
        let output = LyapunovExecutor::run_with_config(map, starting_point, &self.config)?;
        let result = LyapunovResult::from_executor(output, &self.config, starting_point.len());

        tracing::debug!(
            exponent = result.exponent.to_f64().unwrap_or(f64::NAN),
            "largest Lyapunov exponent estimated"
        );

        Ok(result)
    }

    /// The validated configuration.
    pub fn config(&self) -> &LyapunovConfig<T> {
        &self.config
    }
}
