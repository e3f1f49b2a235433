//! Output types for Lyapunov exponent estimation.
//!
//! ## Purpose
//!
//! This module defines [`LyapunovResult`], which carries the exponent of a
//! run together with the optional convergence trace, raw log-divergences and
//! diagnostics, plus the controls that produced them.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional sequences use `Option<Vec<T>>`.
//! * **Either-or view**: [`LyapunovOutput`] reduces a result to the scalar or
//!   the trace, depending on the requested [`OutputMode`].
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * A populated `convergence` or `log_divergence` has exactly `blocks` entries.
//! * When `convergence` is populated, its last entry equals `exponent`.
//! * The exponent is expressed per unit of `dt`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorOutput, LyapunovConfig};
use crate::evaluation::convergence::Aggregator;
use crate::evaluation::diagnostics::ConvergenceDiagnostics;

// ============================================================================
// Output Mode
// ============================================================================

/// What the estimator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputMode {
    /// The scalar exponent only.
    #[default]
    Exponent,

    /// The running estimate after every block.
    Convergence,
}

/// The requested output of a run: a scalar or a convergence trace.
#[derive(Debug, Clone, PartialEq)]
pub enum LyapunovOutput<T> {
    /// Largest Lyapunov exponent per unit time.
    Exponent(T),

    /// Running estimate after each block, in block order.
    Convergence(Vec<T>),
}

// ============================================================================
// Result Structure
// ============================================================================

/// Result of a largest Lyapunov exponent estimation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LyapunovResult<T> {
    /// Largest Lyapunov exponent per unit time.
    pub exponent: T,

    /// Running estimate after each block (convergence mode only).
    pub convergence: Option<Vec<T>>,

    /// Per-block `ln(‖divergence‖ / deviation_scale)`, if requested.
    pub log_divergence: Option<Vec<T>>,

    /// Convergence diagnostics, if requested.
    pub diagnostics: Option<ConvergenceDiagnostics<T>>,

    /// State dimension.
    pub dimension: usize,

    /// Number of renormalization blocks.
    pub blocks: usize,

    /// Map calls per block.
    pub part_time_steps: usize,

    /// Duration of one map call used for normalization.
    pub dt: T,

    /// Perturbation magnitude maintained during the run.
    pub deviation_scale: T,

    /// Total number of map calls performed.
    pub iterator_calls: usize,

    /// First block with a non-finite log-divergence, if any.
    pub first_non_finite_block: Option<usize>,
}

impl<T: Float> LyapunovResult<T> {
    /// Assemble a result from a finished run.
    pub fn from_executor(
        output: ExecutorOutput<T>,
        config: &LyapunovConfig<T>,
        dimension: usize,
    ) -> Self {
        let aggregator = Aggregator::new(output.dt, config.part_time_steps);
        let exponent = aggregator.exponent(&output.log_divergence);

        let keep_trace = config.output_mode == OutputMode::Convergence;
        let trace = if keep_trace || config.return_diagnostics {
            Some(aggregator.trace(&output.log_divergence))
        } else {
            None
        };

        let diagnostics = match (&trace, config.return_diagnostics) {
            (Some(trace), true) => ConvergenceDiagnostics::compute(
                trace,
                &output.log_divergence,
                ConvergenceDiagnostics::<T>::DEFAULT_TAIL_FRACTION,
            ),
            _ => None,
        };

        Self {
            exponent,
            convergence: if keep_trace { trace } else { None },
            log_divergence: if config.return_log_divergence {
                Some(output.log_divergence)
            } else {
                None
            },
            diagnostics,
            dimension,
            blocks: config.blocks,
            part_time_steps: config.part_time_steps,
            dt: output.dt,
            deviation_scale: config.deviation_scale,
            iterator_calls: output.iterator_calls,
            first_non_finite_block: output.first_non_finite_block,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether the exponent is a finite number.
    pub fn is_finite(&self) -> bool {
        self.exponent.is_finite()
    }

    /// Check if the convergence trace was kept.
    pub fn has_convergence(&self) -> bool {
        self.convergence.is_some()
    }

    /// Physical time covered by the run (excluding transient steps).
    pub fn total_time(&self) -> T {
        let blocks = T::from(self.blocks).unwrap_or(T::nan());
        let steps = T::from(self.part_time_steps).unwrap_or(T::nan());
        blocks * self.dt * steps
    }

    /// The configured output: the trace in convergence mode, else the scalar.
    pub fn output(&self) -> LyapunovOutput<T> {
        match &self.convergence {
            Some(trace) => LyapunovOutput::Convergence(trace.clone()),
            None => LyapunovOutput::Exponent(self.exponent),
        }
    }

    /// Consume the result, keeping only the configured output.
    pub fn into_output(self) -> LyapunovOutput<T> {
        match self.convergence {
            Some(trace) => LyapunovOutput::Convergence(trace),
            None => LyapunovOutput::Exponent(self.exponent),
        }
    }
}

impl<T: Copy> LyapunovOutput<T> {
    /// The final estimate: the scalar, or the last trace entry.
    pub fn final_estimate(&self) -> Option<T> {
        match self {
            Self::Exponent(value) => Some(*value),
            Self::Convergence(trace) => trace.last().copied(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for LyapunovResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimension:        {}", self.dimension)?;
        writeln!(f, "  Blocks:           {}", self.blocks)?;
        writeln!(f, "  Steps per block:  {}", self.part_time_steps)?;
        writeln!(f, "  dt:               {}", self.dt)?;
        writeln!(f, "  Deviation scale:  {}", self.deviation_scale)?;
        writeln!(f, "  Map calls:        {}", self.iterator_calls)?;
        writeln!(f, "  Largest exponent: {:.6}", self.exponent)?;

        if let Some(block) = self.first_non_finite_block {
            writeln!(f, "  Warning: non-finite divergence from block {}", block)?;
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "{}", diag)?;
        }

        if let Some(trace) = &self.convergence {
            let shown = trace.len().min(10);
            let first = trace.len() - shown;

            writeln!(f)?;
            writeln!(f, "Convergence (last {} of {} blocks):", shown, trace.len())?;
            writeln!(f, "  {:>8} {:>12}", "Block", "Estimate")?;
            writeln!(f, "  {:-<21}", "")?;
            for (i, value) in trace.iter().enumerate().skip(first) {
                writeln!(f, "  {:>8} {:>12.6}", i + 1, value)?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// Ensemble Result
// ============================================================================

/// Results of independent runs from several starting points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnsembleResult<T> {
    /// One result per starting point, in input order.
    pub runs: Vec<LyapunovResult<T>>,

    /// Mean of the finite exponents (NaN if there are none).
    pub mean: T,

    /// Population standard deviation of the finite exponents (NaN if there are none).
    pub std_dev: T,

    /// Smallest finite exponent (NaN if there are none).
    pub min: T,

    /// Largest finite exponent (NaN if there are none).
    pub max: T,

    /// Number of runs with a finite exponent.
    pub finite_runs: usize,
}

impl<T: Float> EnsembleResult<T> {
    /// Aggregate independent runs.
    pub fn from_runs(runs: Vec<LyapunovResult<T>>) -> Self {
        let mut finite_runs = 0;
        let mut sum = T::zero();
        let mut min = T::infinity();
        let mut max = T::neg_infinity();
        for run in runs.iter().filter(|run| run.is_finite()) {
            finite_runs += 1;
            sum = sum + run.exponent;
            min = min.min(run.exponent);
            max = max.max(run.exponent);
        }

        if finite_runs == 0 {
            return Self {
                runs,
                mean: T::nan(),
                std_dev: T::nan(),
                min: T::nan(),
                max: T::nan(),
                finite_runs,
            };
        }

        let n = T::from(finite_runs).unwrap_or(T::one());
        let mean = sum / n;
        let variance = runs
            .iter()
            .filter(|run| run.is_finite())
            .fold(T::zero(), |acc, run| {
                let d = run.exponent - mean;
                acc + d * d
            })
            / n;

        Self {
            runs,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            finite_runs,
        }
    }

    /// Exponents of all runs, in input order.
    pub fn exponents(&self) -> Vec<T> {
        self.runs.iter().map(|run| run.exponent).collect()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the ensemble holds no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl<T: Float + Display + Debug> Display for EnsembleResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Ensemble Summary:")?;
        writeln!(f, "  Runs:         {}", self.runs.len())?;
        writeln!(f, "  Finite runs:  {}", self.finite_runs)?;
        writeln!(f, "  Mean:         {:.6}", self.mean)?;
        writeln!(f, "  Std. dev.:    {:.6}", self.std_dev)?;
        writeln!(f, "  Range:        [{:.6}, {:.6}]", self.min, self.max)?;
        writeln!(f)?;
        writeln!(f, "  {:>6} {:>12}", "Run", "Exponent")?;
        writeln!(f, "  {:-<19}", "")?;
        for (i, run) in self.runs.iter().enumerate() {
            writeln!(f, "  {:>6} {:>12.6}", i, run.exponent)?;
        }
        Ok(())
    }
}
