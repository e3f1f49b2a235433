//! The one-step map contract.
//!
//! ## Purpose
//!
//! This module defines [`DynamicalMap`], the only capability the estimator
//! needs from a dynamical system: advance a state by exactly one internal
//! time step, `x(i+1) = F(x(i))`.
//!
//! ## Design notes
//!
//! * **Out-parameter**: The map writes its image into a caller-provided slice,
//!   so the estimator can recycle buffers and the dimension is fixed by construction.
//! * **Closures**: Any `Fn(&[T], &mut [T])` is a map.
//! * **Time step hint**: Systems obtained by discretizing a flow can report the
//!   physical duration of one step; the estimator uses it when `dt` is not configured.
//!
//! ## Invariants
//!
//! * `step` must be deterministic and free of side effects for the duration of a run.
//! * `next` has the same length as `state`; every component of `next` must be written.
//!
//! ## Non-goals
//!
//! * This module does not provide a catalogue of systems.

// External dependencies
use num_traits::Float;

// ============================================================================
// Map Trait
// ============================================================================

/// A discrete-time dynamical system given by its one-step update map.
pub trait DynamicalMap<T> {
    /// Advance `state` by one step, writing the image into `next`.
    fn step(&self, state: &[T], next: &mut [T]);

    /// Physical duration of one step, if the system defines one.
    fn time_step(&self) -> Option<T> {
        None
    }
}

impl<T, F> DynamicalMap<T> for F
where
    F: Fn(&[T], &mut [T]),
{
    #[inline]
    fn step(&self, state: &[T], next: &mut [T]) {
        self(state, next)
    }
}

// ============================================================================
// Time Step Wrapper
// ============================================================================

/// A map annotated with the physical duration of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<M, T> {
    /// The wrapped map.
    pub map: M,

    /// Duration of one step.
    pub dt: T,
}

impl<M, T> Timed<M, T> {
    /// Attach the step duration `dt` to `map`.
    pub fn new(map: M, dt: T) -> Self {
        Self { map, dt }
    }
}

impl<T: Float, M: DynamicalMap<T>> DynamicalMap<T> for Timed<M, T> {
    #[inline]
    fn step(&self, state: &[T], next: &mut [T]) {
        self.map.step(state, next)
    }

    fn time_step(&self) -> Option<T> {
        Some(self.dt)
    }
}
