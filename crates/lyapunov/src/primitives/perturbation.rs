//! Initial perturbation configuration.
//!
//! ## Purpose
//!
//! This module defines how the offset between the reference and the perturbed
//! trajectory is chosen before the first block. The choice is an explicit
//! enumeration resolved once, before the main loop starts.
//!
//! ## Key concepts
//!
//! * **Uniform**: The all-ones direction of the state dimension.
//! * **Direction**: A caller-supplied direction; only its orientation matters,
//!   its magnitude is discarded during normalization.
//!
//! ## Invariants
//!
//! * A resolved perturbation always has the state dimension and an L2 norm
//!   equal to the configured deviation scale (up to rounding).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Direction of the initial perturbation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Perturbation<T> {
    /// Perturb every component equally (the all-ones direction).
    Uniform,

    /// Perturb along the given direction.
    Direction(Vec<T>),
}

impl<T> Default for Perturbation<T> {
    fn default() -> Self {
        Self::Uniform
    }
}

impl<T> Perturbation<T> {
    /// Dimension required by this perturbation, if it fixes one.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Self::Uniform => None,
            Self::Direction(dir) => Some(dir.len()),
        }
    }

    /// Whether the caller supplied an explicit direction.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Direction(_))
    }
}

impl<T> From<Vec<T>> for Perturbation<T> {
    fn from(direction: Vec<T>) -> Self {
        Self::Direction(direction)
    }
}

impl<T: Clone> From<&[T]> for Perturbation<T> {
    fn from(direction: &[T]) -> Self {
        Self::Direction(direction.to_vec())
    }
}
