//! Working memory for the two-trajectory estimator.
//!
//! ## Purpose
//!
//! This module provides the buffers that hold the reference trajectory, the
//! perturbed trajectory, and the scratch space the dynamical map writes into.
//! All buffers are allocated once per run and recycled for every map call,
//! so the hot loop performs no allocation.
//!
//! ## Design notes
//!
//! * **Double buffering**: The map writes into `scratch`, which is then swapped
//!   with the state it was computed from.
//! * **Exclusive ownership**: A buffer belongs to exactly one run; parallel
//!   runs each allocate their own.
//!
//! ## Invariants
//!
//! * `reference`, `perturbed`, `scratch` and `divergence` always have the same length.
//!
//! ## Non-goals
//!
//! * This module does not know how to advance a state (handled by the engine).

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
use num_traits::Zero;

// ============================================================================
// Trajectory Buffer
// ============================================================================

/// Working memory for a single estimation run.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer<T> {
    /// Current state of the reference trajectory.
    pub reference: Vec<T>,

    /// Current state of the perturbed trajectory.
    pub perturbed: Vec<T>,

    /// Output slot for the next map evaluation.
    pub scratch: Vec<T>,

    /// Difference `perturbed - reference` at the end of a block.
    pub divergence: Vec<T>,
}

impl<T: Copy + Zero> TrajectoryBuffer<T> {
    /// Allocate buffers for a state of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Self {
            reference: vec![T::zero(); dim],
            perturbed: vec![T::zero(); dim],
            scratch: vec![T::zero(); dim],
            divergence: vec![T::zero(); dim],
        }
    }

    /// Dimension of the state vectors.
    #[inline]
    pub fn dim(&self) -> usize {
        self.reference.len()
    }

    /// Seed both trajectories: `reference = start`, `perturbed = start + offset`.
    pub fn seed(&mut self, start: &[T], offset: &[T])
    where
        T: core::ops::Add<Output = T>,
    {
        debug_assert_eq!(start.len(), self.dim());
        debug_assert_eq!(offset.len(), self.dim());
        self.reference.copy_from_slice(start);
        for ((p, &s), &o) in self.perturbed.iter_mut().zip(start).zip(offset) {
            *p = s + o;
        }
    }

    /// Promote the scratch slot to the reference state.
    #[inline]
    pub fn commit_reference(&mut self) {
        swap(&mut self.reference, &mut self.scratch);
    }

    /// Promote the scratch slot to the perturbed state.
    #[inline]
    pub fn commit_perturbed(&mut self) {
        swap(&mut self.perturbed, &mut self.scratch);
    }
}
