//! Exponent aggregation and convergence traces.
//!
//! ## Purpose
//!
//! This module converts the log-divergence sequence into exponents measured
//! per unit of physical time. The scalar exponent is the mean log-divergence
//! divided by the block duration; the convergence trace is the same quantity
//! evaluated on every prefix of the sequence.
//!
//! ## Design notes
//!
//! * **Single formula**: Both outputs divide a running sum by
//!   `k * dt * part_time_steps`, so the last trace entry and the scalar
//!   exponent are bit-identical.
//! * **Non-finite propagation**: A non-finite log-divergence poisons every
//!   later trace entry and the scalar; nothing is filtered.
//!
//! ## Invariants
//!
//! * `trace(log_div).len() == log_div.len()`.
//! * `trace(log_div).last() == Some(&exponent(log_div))` for non-empty input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Aggregator
// ============================================================================

/// Converts log-divergences into exponents per unit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregator<T> {
    /// Duration of one map call.
    pub dt: T,

    /// Map calls per renormalization block.
    pub part_time_steps: usize,
}

impl<T: Float> Aggregator<T> {
    /// Create an aggregator for blocks of `part_time_steps` calls of length `dt`.
    pub fn new(dt: T, part_time_steps: usize) -> Self {
        Self {
            dt,
            part_time_steps,
        }
    }

    /// Physical time elapsed after `blocks` blocks.
    #[inline]
    pub fn elapsed(&self, blocks: usize) -> T {
        let k = T::from(blocks).unwrap_or(T::nan());
        let steps = T::from(self.part_time_steps).unwrap_or(T::nan());
        k * self.dt * steps
    }

    /// Scalar exponent: mean log-divergence per unit time.
    ///
    /// Returns NaN for an empty sequence.
    pub fn exponent(&self, log_divergence: &[T]) -> T {
        let sum = log_divergence
            .iter()
            .fold(T::zero(), |acc, &value| acc + value);
        sum / self.elapsed(log_divergence.len())
    }

    /// Running exponent estimate after each block.
    pub fn trace(&self, log_divergence: &[T]) -> Vec<T> {
        let mut sum = T::zero();
        log_divergence
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                sum = sum + value;
                sum / self.elapsed(i + 1)
            })
            .collect()
    }
}
