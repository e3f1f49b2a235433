//! High-level API for largest Lyapunov exponent estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the estimation controls and the choice of an execution
//! adapter (Single or Ensemble).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Single and Ensemble modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LyapunovBuilder`] via `Lyapunov::new()`.
//! 2. Chain configuration methods (`.blocks()`, `.part_time_steps()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Single)` to get an execution builder.
//! 4. Call `.build()?` and then `.estimate(&map, &start)?`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::ensemble::EnsembleLyapunovBuilder;
use crate::adapters::single::SingleLyapunovBuilder;

// Publicly re-exported types
pub use crate::engine::executor::LyapunovConfig;
pub use crate::engine::output::{EnsembleResult, LyapunovOutput, LyapunovResult, OutputMode};
pub use crate::evaluation::diagnostics::ConvergenceDiagnostics;
pub use crate::primitives::errors::LyapunovError;
pub use crate::primitives::perturbation::Perturbation;
pub use crate::systems::map::{DynamicalMap, Timed};
pub use crate::systems::reference::{HenonMap, LinearScaling, LogisticMap};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Ensemble, Single};
}

/// Fluent builder for configuring estimation parameters and execution modes.
#[derive(Debug, Clone)]
pub struct LyapunovBuilder<T> {
    /// Perturbation magnitude (default 1e-10).
    pub deviation_scale: Option<T>,

    /// Number of renormalization blocks N (default 100 000).
    pub blocks: Option<usize>,

    /// Map calls per block (default 10).
    pub part_time_steps: Option<usize>,

    /// Duration of one map call (default: map hint, then 1).
    pub dt: Option<T>,

    /// Initial perturbation direction (default: all ones).
    pub perturbation: Option<Perturbation<T>>,

    /// Map calls discarded before the perturbation is placed (default 0).
    pub transient_steps: Option<usize>,

    /// Return the running estimate after every block.
    pub return_convergence: Option<bool>,

    /// Return the raw per-block log-divergences.
    pub return_log_divergence: Option<bool>,

    /// Compute convergence diagnostics.
    pub return_diagnostics: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LyapunovBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LyapunovBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: LyapunovAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            deviation_scale: None,
            blocks: None,
            part_time_steps: None,
            dt: None,
            perturbation: None,
            transient_steps: None,
            return_convergence: None,
            return_log_divergence: None,
            return_diagnostics: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the L2 magnitude of the perturbation kept after every renormalization.
    pub fn deviation_scale(mut self, scale: T) -> Self {
        if self.deviation_scale.is_some() {
            self.duplicate_param = Some("deviation_scale");
        }
        self.deviation_scale = Some(scale);
        self
    }

    /// Set the number of renormalization blocks (N).
    pub fn blocks(mut self, blocks: usize) -> Self {
        if self.blocks.is_some() {
            self.duplicate_param = Some("blocks");
        }
        self.blocks = Some(blocks);
        self
    }

    /// Set the number of map calls between renormalizations.
    pub fn part_time_steps(mut self, steps: usize) -> Self {
        if self.part_time_steps.is_some() {
            self.duplicate_param = Some("part_time_steps");
        }
        self.part_time_steps = Some(steps);
        self
    }

    /// Set the physical duration of one map call.
    pub fn dt(mut self, dt: T) -> Self {
        if self.dt.is_some() {
            self.duplicate_param = Some("dt");
        }
        self.dt = Some(dt);
        self
    }

    /// Set the direction of the initial perturbation.
    ///
    /// The direction is rescaled to `deviation_scale`; only its orientation matters.
    pub fn initial_perturbation(mut self, direction: impl Into<Perturbation<T>>) -> Self {
        if self.perturbation.is_some() {
            self.duplicate_param = Some("initial_perturbation");
        }
        self.perturbation = Some(direction.into());
        self
    }

    /// Set the number of map calls applied to the starting point before measuring.
    pub fn transient_steps(mut self, steps: usize) -> Self {
        if self.transient_steps.is_some() {
            self.duplicate_param = Some("transient_steps");
        }
        self.transient_steps = Some(steps);
        self
    }

    /// Return the convergence trace (`true`) or only the scalar exponent (`false`).
    pub fn return_convergence(mut self, enabled: bool) -> Self {
        if self.return_convergence.is_some() {
            self.duplicate_param = Some("return_convergence");
        }
        self.return_convergence = Some(enabled);
        self
    }

    /// Include the raw per-block log-divergences in the output.
    pub fn return_log_divergence(mut self) -> Self {
        self.return_log_divergence = Some(true);
        self
    }

    /// Include convergence diagnostics in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait LyapunovAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`LyapunovBuilder`] into a specialized execution builder.
    fn convert(builder: LyapunovBuilder<T>) -> Self::Output;
}

/// Marker for a single starting point.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl<T: Float> LyapunovAdapter<T> for Single {
    type Output = SingleLyapunovBuilder<T>;

    fn convert(builder: LyapunovBuilder<T>) -> Self::Output {
        let mut result = SingleLyapunovBuilder::default();

        if let Some(scale) = builder.deviation_scale {
            result.deviation_scale = scale;
        }
        if let Some(blocks) = builder.blocks {
            result.blocks = blocks;
        }
        if let Some(steps) = builder.part_time_steps {
            result.part_time_steps = steps;
        }
        result.dt = builder.dt;
        if let Some(p) = builder.perturbation {
            result.perturbation = p;
        }
        if let Some(steps) = builder.transient_steps {
            result.transient_steps = steps;
        }
        if let Some(rc) = builder.return_convergence {
            result.return_convergence = rc;
        }
        if let Some(rl) = builder.return_log_divergence {
            result.return_log_divergence = rl;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for several independent starting points.
#[derive(Debug, Clone, Copy)]
pub struct Ensemble;

impl<T: Float> LyapunovAdapter<T> for Ensemble {
    type Output = EnsembleLyapunovBuilder<T>;

    fn convert(builder: LyapunovBuilder<T>) -> Self::Output {
        let parallel = builder.parallel;
        EnsembleLyapunovBuilder {
            base: Single::convert(builder),
            parallel,
        }
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// Estimate the largest Lyapunov exponent of `map` from `starting_point` with default controls.
///
/// Equivalent to `Lyapunov::new().adapter(Single).build()?.estimate(map, starting_point)`
/// followed by reading the scalar exponent.
pub fn largest_lyapunov_exponent<T, M>(map: &M, starting_point: &[T]) -> Result<T, LyapunovError>
where
    T: Float,
    M: DynamicalMap<T> + ?Sized,
{
    let estimator = LyapunovBuilder::new().adapter(Single).build()?;
    Ok(estimator.estimate(map, starting_point)?.exponent)
}
