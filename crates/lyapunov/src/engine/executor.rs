//! Execution engine for largest Lyapunov exponent estimation.
//!
//! ## Purpose
//!
//! This module runs the Benettin two-trajectory procedure. A reference and a
//! perturbed trajectory are advanced side by side through the dynamical map;
//! after every block of `part_time_steps` calls the logarithm of their
//! separation growth is recorded and the perturbed state is pulled back to
//! distance `deviation_scale` along the current separation direction.
//!
//! ## Design notes
//!
//! * **Two trajectories, one map**: Both states go through the same map the
//!   same number of times per block, reference first.
//! * **Current direction**: Renormalization keeps the direction the separation
//!   has rotated into, which is what isolates the largest exponent.
//! * **Allocation-free loop**: All state lives in a [`TrajectoryBuffer`]
//!   allocated once per run.
//! * **Validation up front**: `run_with_config` validates the full request
//!   before the first map call.
//!
//! ## Invariants
//!
//! * The log-divergence sequence has exactly `blocks` entries.
//! * The map is called exactly `transient_steps + 2 * blocks * part_time_steps` times.
//! * After each block `‖perturbed - reference‖ == deviation_scale` up to rounding.
//!
//! ## Non-goals
//!
//! * A zero separation is not guarded: it yields `ln 0 = -inf` for the block
//!   and NaN states afterwards, which propagate into the estimate.
//! * This module does not aggregate the sequence into exponents (see `evaluation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::swap;
use num_traits::Float;

// Internal dependencies
use crate::engine::output::OutputMode;
use crate::engine::validator::Validator;
use crate::math::vector::{difference_into, l2_norm, rescale_along, with_length};
use crate::primitives::buffer::TrajectoryBuffer;
use crate::primitives::errors::LyapunovError;
use crate::primitives::perturbation::Perturbation;
use crate::systems::map::DynamicalMap;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single estimation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LyapunovConfig<T> {
    /// L2 magnitude of the perturbation after initialization and every renormalization.
    pub deviation_scale: T,

    /// Number of renormalization blocks (N).
    pub blocks: usize,

    /// Map calls per block between renormalizations.
    pub part_time_steps: usize,

    /// Duration of one map call. `None` defers to the map's hint, then 1.
    pub dt: Option<T>,

    /// Direction of the initial perturbation.
    pub perturbation: Perturbation<T>,

    /// Map calls applied to the starting point before the perturbation is placed.
    pub transient_steps: usize,

    /// Scalar exponent or full convergence trace.
    pub output_mode: OutputMode,

    /// Keep the raw per-block log-divergences in the result.
    pub return_log_divergence: bool,

    /// Compute convergence diagnostics.
    pub return_diagnostics: bool,
}

impl<T: Float> Default for LyapunovConfig<T> {
    fn default() -> Self {
        Self {
            deviation_scale: T::from(Self::DEFAULT_DEVIATION_SCALE)
                .unwrap_or_else(T::epsilon),
            blocks: Self::DEFAULT_BLOCKS,
            part_time_steps: Self::DEFAULT_PART_TIME_STEPS,
            dt: None,
            perturbation: Perturbation::Uniform,
            transient_steps: 0,
            output_mode: OutputMode::default(),
            return_log_divergence: false,
            return_diagnostics: false,
        }
    }
}

impl<T> LyapunovConfig<T> {
    /// Default perturbation magnitude.
    pub const DEFAULT_DEVIATION_SCALE: f64 = 1e-10;

    /// Default number of renormalization blocks.
    pub const DEFAULT_BLOCKS: usize = 100_000;

    /// Default number of map calls per block.
    pub const DEFAULT_PART_TIME_STEPS: usize = 10;
}

impl<T: Float> LyapunovConfig<T> {
    /// Validate every configuration parameter.
    pub fn validate(&self) -> Result<(), LyapunovError> {
        Validator::validate_deviation_scale(self.deviation_scale)?;
        Validator::validate_blocks(self.blocks)?;
        Validator::validate_part_time_steps(self.part_time_steps)?;
        if let Some(dt) = self.dt {
            Validator::validate_dt(dt)?;
        }
        Validator::validate_perturbation(&self.perturbation)
    }

    /// Resolve the step duration: configured value, then the map hint, then 1.
    pub fn resolve_dt<M>(&self, map: &M) -> Result<T, LyapunovError>
    where
        M: DynamicalMap<T> + ?Sized,
    {
        let dt = self.dt.or_else(|| map.time_step()).unwrap_or_else(T::one);
        Validator::validate_dt(dt)?;
        Ok(dt)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Raw output of one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// `ln(‖divergence‖ / deviation_scale)` for every block, in block order.
    pub log_divergence: Vec<T>,

    /// Step duration actually used.
    pub dt: T,

    /// Total number of map calls performed.
    pub iterator_calls: usize,

    /// Index of the first block whose log-divergence was not finite.
    pub first_non_finite_block: Option<usize>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the two-trajectory renormalization procedure.
pub struct LyapunovExecutor;

impl LyapunovExecutor {
    /// Validate the request and run it.
    pub fn run_with_config<T, M>(
        map: &M,
        starting_point: &[T],
        config: &LyapunovConfig<T>,
    ) -> Result<ExecutorOutput<T>, LyapunovError>
    where
        T: Float,
        M: DynamicalMap<T> + ?Sized,
    {
        config.validate()?;
        Validator::validate_starting_point(starting_point)?;
        Validator::validate_dimensions(&config.perturbation, starting_point.len())?;

        let dt = config.resolve_dt(map)?;
        let dim = starting_point.len();
        let offset = Self::resolve_perturbation(&config.perturbation, dim, config.deviation_scale)?;

        tracing::debug!(
            dim,
            blocks = config.blocks,
            part_time_steps = config.part_time_steps,
            transient_steps = config.transient_steps,
            dt = dt.to_f64().unwrap_or(f64::NAN),
            "starting largest Lyapunov exponent estimation"
        );

        let mut buffer = TrajectoryBuffer::new(dim);
        let start = Self::settle_transient(map, starting_point, config.transient_steps, &mut buffer);
        buffer.seed(&start, &offset);

        let mut log_divergence = Vec::with_capacity(config.blocks);
        let first_non_finite_block = Self::run_blocks(
            map,
            &mut buffer,
            config.deviation_scale,
            config.blocks,
            config.part_time_steps,
            &mut log_divergence,
        );

        let iterator_calls = config.transient_steps + 2 * config.blocks * config.part_time_steps;
        tracing::debug!(iterator_calls, "finished largest Lyapunov exponent estimation");

        Ok(ExecutorOutput {
            log_divergence,
            dt,
            iterator_calls,
            first_non_finite_block,
        })
    }

    /// Turn a perturbation choice into an offset of dimension `dim` and norm `scale`.
    pub fn resolve_perturbation<T: Float>(
        perturbation: &Perturbation<T>,
        dim: usize,
        scale: T,
    ) -> Result<Vec<T>, LyapunovError> {
        Validator::validate_dimensions(perturbation, dim)?;

        let ones;
        let direction: &[T] = match perturbation {
            Perturbation::Uniform => {
                ones = vec![T::one(); dim];
                &ones
            }
            Perturbation::Direction(direction) => direction,
        };

        with_length(direction, scale).ok_or_else(|| {
            LyapunovError::DegeneratePerturbation(l2_norm(direction).to_f64().unwrap_or(f64::NAN))
        })
    }

    /// Advance the starting point by `steps` map calls.
    pub fn settle_transient<T, M>(
        map: &M,
        starting_point: &[T],
        steps: usize,
        buffer: &mut TrajectoryBuffer<T>,
    ) -> Vec<T>
    where
        T: Float,
        M: DynamicalMap<T> + ?Sized,
    {
        let mut state = starting_point.to_vec();
        for _ in 0..steps {
            map.step(&state, &mut buffer.scratch);
            swap(&mut state, &mut buffer.scratch);
        }
        state
    }

    /// Run `blocks` renormalization blocks on a seeded buffer.
    ///
    /// Appends one log-divergence per block to `log_divergence` and returns
    /// the index of the first non-finite block, if any.
    pub fn run_blocks<T, M>(
        map: &M,
        buffer: &mut TrajectoryBuffer<T>,
        deviation_scale: T,
        blocks: usize,
        part_time_steps: usize,
        log_divergence: &mut Vec<T>,
    ) -> Option<usize>
    where
        T: Float,
        M: DynamicalMap<T> + ?Sized,
    {
        let mut first_non_finite = None;

        for block in 0..blocks {
            for _ in 0..part_time_steps {
                map.step(&buffer.reference, &mut buffer.scratch);
                buffer.commit_reference();
                map.step(&buffer.perturbed, &mut buffer.scratch);
                buffer.commit_perturbed();
            }

            difference_into(&buffer.perturbed, &buffer.reference, &mut buffer.divergence);
            let norm = l2_norm(&buffer.divergence);
            let value = (norm / deviation_scale).ln();
            log_divergence.push(value);

            if first_non_finite.is_none() && !value.is_finite() {
                tracing::warn!(
                    block,
                    norm = norm.to_f64().unwrap_or(f64::NAN),
                    "non-finite log-divergence; the estimate will not be finite"
                );
                first_non_finite = Some(block);
            }

            rescale_along(
                &buffer.reference,
                &buffer.divergence,
                deviation_scale / norm,
                &mut buffer.perturbed,
            );
        }

        first_non_finite
    }
}
