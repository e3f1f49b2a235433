//! Diagnostics describing how settled a convergence trace is.
//!
//! ## Purpose
//!
//! A running Lyapunov estimate only means something once it has stopped
//! wandering. This module summarizes the tail of a convergence trace (its
//! mean, spread and drift) and the raw log-divergence sequence (its range
//! and the number of non-finite blocks) so callers can judge stabilization.
//!
//! ## Design notes
//!
//! * **Tail window**: Statistics use the last `tail_fraction` of the trace
//!   (at least one entry).
//! * **Descriptive only**: Nothing here changes the estimate or rejects a run.
//!
//! ## Invariants
//!
//! * `tail_std` and `tail_drift` are non-negative whenever the tail is finite.
//! * `1 <= tail_len <= trace.len()` for non-empty traces.
//!
//! ## Non-goals
//!
//! * This module does not decide whether a system is chaotic.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary statistics of a convergence trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceDiagnostics<T> {
    /// Final entry of the trace.
    pub estimate: T,

    /// Number of trace entries in the tail window.
    pub tail_len: usize,

    /// Mean of the tail window.
    pub tail_mean: T,

    /// Population standard deviation of the tail window.
    pub tail_std: T,

    /// Largest minus smallest value in the tail window.
    pub tail_drift: T,

    /// Smallest per-block log-divergence.
    pub min_log_divergence: T,

    /// Largest per-block log-divergence.
    pub max_log_divergence: T,

    /// Number of blocks whose log-divergence is NaN or infinite.
    pub non_finite_blocks: usize,
}

impl<T: Float> ConvergenceDiagnostics<T> {
    /// Default share of the trace used as the tail window.
    pub const DEFAULT_TAIL_FRACTION: f64 = 0.1;

    /// Compute diagnostics from a trace and the log-divergences it was built from.
    ///
    /// Returns `None` when the trace is empty.
    pub fn compute(trace: &[T], log_divergence: &[T], tail_fraction: f64) -> Option<Self> {
        let estimate = *trace.last()?;

        let n = trace.len();
        let fraction = if tail_fraction.is_finite() {
            tail_fraction.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_TAIL_FRACTION
        };
        let tail_len = (Float::ceil(n as f64 * fraction) as usize).clamp(1, n);
        let tail = &trace[n - tail_len..];

        let len_t = T::from(tail_len).unwrap_or(T::one());
        let tail_mean = tail.iter().fold(T::zero(), |acc, &v| acc + v) / len_t;
        let variance = tail.iter().fold(T::zero(), |acc, &v| {
            let d = v - tail_mean;
            acc + d * d
        }) / len_t;

        let (lo, hi) = tail
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        let mut min_log = T::infinity();
        let mut max_log = T::neg_infinity();
        let mut non_finite_blocks = 0;
        for &value in log_divergence {
            if value.is_finite() {
                min_log = min_log.min(value);
                max_log = max_log.max(value);
            } else {
                non_finite_blocks += 1;
            }
        }

        Some(Self {
            estimate,
            tail_len,
            tail_mean,
            tail_std: variance.sqrt(),
            tail_drift: hi - lo,
            min_log_divergence: min_log,
            max_log_divergence: max_log,
            non_finite_blocks,
        })
    }

    /// Whether the tail window varies by at most `tolerance` and every block was finite.
    pub fn is_settled(&self, tolerance: T) -> bool {
        self.non_finite_blocks == 0 && self.tail_drift.is_finite() && self.tail_drift <= tolerance
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ConvergenceDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Convergence Diagnostics:")?;
        writeln!(f, "  Estimate:       {:.6}", self.estimate)?;
        writeln!(f, "  Tail window:    {} blocks", self.tail_len)?;
        writeln!(f, "  Tail mean:      {:.6}", self.tail_mean)?;
        writeln!(f, "  Tail SD:        {:.6}", self.tail_std)?;
        writeln!(f, "  Tail drift:     {:.6}", self.tail_drift)?;
        writeln!(
            f,
            "  Log-div range:  [{:.4}, {:.4}]",
            self.min_log_divergence, self.max_log_divergence
        )?;
        write!(f, "  Non-finite:     {}", self.non_finite_blocks)
    }
}
