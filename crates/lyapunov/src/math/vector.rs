//! Euclidean vector operations on state slices.
//!
//! ## Purpose
//!
//! This module implements the handful of vector operations required by the
//! renormalization step: the L2 norm, the difference of two states, and the
//! "restore magnitude along the current direction" update.
//!
//! ## Design notes
//!
//! * **Slice-based**: All functions operate on `&[T]` / `&mut [T]` of equal length.
//! * **Scaled norm**: `l2_norm` is exact in range for any finite direction,
//!   however small or large its components.
//! * **Unguarded**: `rescale_along` does not special-case a zero norm; the
//!   resulting non-finite values are the caller's concern.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output slices have the same length as the input slices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Euclidean (L2) norm of `v`.
///
/// Components are divided by the largest magnitude before squaring, so the
/// result neither underflows nor overflows for finite input. A NaN component
/// yields NaN.
pub fn l2_norm<T: Float>(v: &[T]) -> T {
    let mut scale = T::zero();
    for &x in v {
        let magnitude = x.abs();
        if magnitude.is_nan() {
            return magnitude;
        }
        if magnitude > scale {
            scale = magnitude;
        }
    }

    if scale == T::zero() || scale.is_infinite() {
        return scale;
    }

    let sum = v.iter().fold(T::zero(), |acc, &x| {
        let r = x / scale;
        acc + r * r
    });
    scale * sum.sqrt()
}

/// Write `a - b` into `out`.
#[inline]
pub fn difference_into<T: Float>(a: &[T], b: &[T], out: &mut [T]) {
    for ((o, &ai), &bi) in out.iter_mut().zip(a).zip(b) {
        *o = ai - bi;
    }
}

/// Set `target = base + direction * factor`.
///
/// With `factor = scale / ‖direction‖` this places `target` at distance
/// `scale` from `base` along `direction`.
#[inline]
pub fn rescale_along<T: Float>(base: &[T], direction: &[T], factor: T, target: &mut [T]) {
    for ((t, &b), &d) in target.iter_mut().zip(base).zip(direction) {
        *t = b + d * factor;
    }
}

/// Return `direction` rescaled to have L2 norm `length`.
///
/// Returns `None` if the norm of `direction` is zero or not finite.
pub fn with_length<T: Float>(direction: &[T], length: T) -> Option<Vec<T>> {
    let norm = l2_norm(direction);
    if !norm.is_finite() || norm <= T::zero() {
        return None;
    }
    let factor = length / norm;
    Some(direction.iter().map(|&d| d * factor).collect())
}
