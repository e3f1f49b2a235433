//! Reference maps with known largest Lyapunov exponents.
//!
//! ## Purpose
//!
//! These maps exist to validate the estimator against analytically or
//! numerically well-established values. They are not meant to grow into a
//! system catalogue.
//!
//! ## Key concepts
//!
//! * **Logistic map** at `r = 4`: exponent `ln 2`.
//! * **Linear scaling** `x -> c x`: exponent `ln |c|` in every direction.
//! * **Hénon map** at `a = 1.4, b = 0.3`: exponent ≈ 0.419.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::systems::map::DynamicalMap;

// ============================================================================
// Logistic Map
// ============================================================================

/// The logistic map `x -> r x (1 - x)` on a one-dimensional state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticMap<T> {
    /// Growth rate.
    pub r: T,
}

impl<T: Float> LogisticMap<T> {
    /// Create a logistic map with growth rate `r`.
    pub fn new(r: T) -> Self {
        Self { r }
    }

    /// The fully chaotic logistic map, `r = 4`.
    pub fn fully_chaotic() -> Self {
        Self::new(T::from(4.0).unwrap_or(T::one()))
    }

    /// A starting point inside the unit interval away from fixed points.
    pub fn default_starting_point(&self) -> Vec<T> {
        Vec::from([T::from(0.1).unwrap_or(T::zero())])
    }
}

impl<T: Float> DynamicalMap<T> for LogisticMap<T> {
    /// # Panics
    ///
    /// Panics if `state` or `next` is empty.
    #[inline]
    fn step(&self, state: &[T], next: &mut [T]) {
        next[0] = self.r * state[0] * (T::one() - state[0]);
    }
}

// ============================================================================
// Linear Scaling
// ============================================================================

/// The isotropic linear map `x -> c x` in any dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScaling<T> {
    /// Scaling factor applied to every component.
    pub factor: T,
}

impl<T: Float> LinearScaling<T> {
    /// Create a linear map scaling every component by `factor`.
    pub fn new(factor: T) -> Self {
        Self { factor }
    }
}

impl<T: Float> DynamicalMap<T> for LinearScaling<T> {
    #[inline]
    fn step(&self, state: &[T], next: &mut [T]) {
        for (n, &s) in next.iter_mut().zip(state) {
            *n = self.factor * s;
        }
    }
}

// ============================================================================
// Hénon Map
// ============================================================================

/// The Hénon map `(x, y) -> (1 - a x^2 + y, b x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HenonMap<T> {
    /// Quadratic coefficient.
    pub a: T,

    /// Contraction coefficient.
    pub b: T,
}

impl<T: Float> HenonMap<T> {
    /// Create a Hénon map with coefficients `a` and `b`.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// The classical parameters `a = 1.4`, `b = 0.3`.
    pub fn classical() -> Self {
        Self::new(
            T::from(1.4).unwrap_or(T::one()),
            T::from(0.3).unwrap_or(T::zero()),
        )
    }

    /// A starting point inside the basin of the strange attractor.
    pub fn default_starting_point(&self) -> Vec<T> {
        Vec::from([T::zero(), T::zero()])
    }
}

impl<T: Float> DynamicalMap<T> for HenonMap<T> {
    /// # Panics
    ///
    /// Panics if `state` or `next` has fewer than two components.
    #[inline]
    fn step(&self, state: &[T], next: &mut [T]) {
        let (x, y) = (state[0], state[1]);
        next[0] = T::one() - self.a * x * x + y;
        next[1] = self.b * x;
    }
}
