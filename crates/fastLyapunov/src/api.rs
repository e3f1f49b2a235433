//! High-level API for Lyapunov exponent estimation with parallel ensembles.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastLyapunov`. It
//! re-uses the `lyapunov` builder and swaps in adapters that accept
//! `ndarray` inputs and spread ensembles over all CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `lyapunov` builder pattern.
//! * **Parallel-First**: Ensembles run in parallel unless `.parallel(false)` is chosen.
//! * **Transparent**: Marker types (Single, Ensemble) select the extended builders.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LyapunovBuilder`] via `Lyapunov::new()`.
//! 2. Chain configuration methods (`.blocks()`, `.transient_steps()`, etc.).
//! 3. Select an adapter via `.adapter(Ensemble)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use lyapunov::internals::api::Ensemble as BaseEnsemble;
use lyapunov::internals::api::Single as BaseSingle;

// Internal dependencies
use crate::adapters::ensemble::ParallelEnsembleLyapunovBuilder;
use crate::adapters::single::FlexibleSingleLyapunovBuilder;

// Publicly re-exported types
pub use lyapunov::internals::api::{
    ConvergenceDiagnostics, DynamicalMap, EnsembleResult, HenonMap, LinearScaling, LogisticMap,
    LyapunovAdapter, LyapunovBuilder, LyapunovConfig, LyapunovError, LyapunovOutput,
    LyapunovResult, OutputMode, Perturbation, Timed,
};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Ensemble, Single};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for a single starting point given in any supported container.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl<T: Float> LyapunovAdapter<T> for Single {
    type Output = FlexibleSingleLyapunovBuilder<T>;

    fn convert(builder: LyapunovBuilder<T>) -> Self::Output {
        FlexibleSingleLyapunovBuilder {
            base: <BaseSingle as LyapunovAdapter<T>>::convert(builder),
        }
    }
}

/// Marker for parallel multi-start ensembles.
#[derive(Debug, Clone, Copy)]
pub struct Ensemble;

impl<T: Float> LyapunovAdapter<T> for Ensemble {
    type Output = ParallelEnsembleLyapunovBuilder<T>;

    fn convert(builder: LyapunovBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastLyapunov Ensemble
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let base = <BaseEnsemble as LyapunovAdapter<T>>::convert(builder).parallel(parallel);

        ParallelEnsembleLyapunovBuilder { base }
    }
}
