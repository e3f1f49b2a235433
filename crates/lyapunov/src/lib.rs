//! # lyapunov — Largest Lyapunov Exponent Estimation for Rust
//!
//! Estimates the largest Lyapunov exponent of a discrete-time dynamical
//! system from nothing more than its one-step update map, using the
//! two-trajectory renormalization procedure of Benettin et al.
//!
//! ## What is the largest Lyapunov exponent?
//!
//! The largest Lyapunov exponent (LLE) is the long-run average exponential
//! rate at which two infinitesimally close trajectories separate. A positive
//! value indicates sensitive dependence on initial conditions (chaos), zero a
//! neutral direction, and a negative value convergence onto a stable orbit.
//!
//! The estimator advances a reference trajectory and a slightly perturbed copy
//! side by side. Every `part_time_steps` map calls it records the logarithm of
//! how much their separation has grown and pulls the perturbed copy back to
//! distance `deviation_scale`, keeping the direction the separation has
//! rotated into. The average of those logarithms per unit time is the estimate.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use lyapunov::prelude::*;
//!
//! // The logistic map at r = 4 has a largest exponent of ln 2.
//! let logistic = |x: &[f64], next: &mut [f64]| next[0] = 4.0 * x[0] * (1.0 - x[0]);
//!
//! let estimator = Lyapunov::new()
//!     .blocks(2_000)          // Number of renormalizations
//!     .part_time_steps(10)    // Map calls between renormalizations
//!     .adapter(Single)
//!     .build()?;
//!
//! let result = estimator.estimate(&logistic, &[0.1])?;
//!
//! assert!((result.exponent - 2f64.ln()).abs() < 0.05);
//! println!("{}", result);
//! # Result::<(), LyapunovError>::Ok(())
//! ```
//!
//! ### Convergence Trace
//!
//! ```rust
//! use lyapunov::prelude::*;
//!
//! let map = LogisticMap::<f64>::fully_chaotic();
//!
//! let estimator = Lyapunov::new()
//!     .blocks(500)
//!     .return_convergence(true)   // Running estimate after every block
//!     .return_diagnostics()       // Tail statistics of the trace
//!     .adapter(Single)
//!     .build()?;
//!
//! let result = estimator.estimate(&map, &[0.1])?;
//!
//! match result.output() {
//!     LyapunovOutput::Convergence(trace) => assert_eq!(trace.len(), 500),
//!     LyapunovOutput::Exponent(_) => unreachable!(),
//! }
//! # Result::<(), LyapunovError>::Ok(())
//! ```
//!
//! ### Several Starting Points
//!
//! ```rust
//! use lyapunov::prelude::*;
//!
//! let henon = HenonMap::<f64>::classical();
//! let starts = vec![vec![0.0, 0.0], vec![0.1, 0.1], vec![-0.2, 0.05]];
//!
//! let ensemble = Lyapunov::new()
//!     .blocks(1_000)
//!     .transient_steps(100)
//!     .adapter(Ensemble)
//!     .build()?;
//!
//! let result = ensemble.estimate(&henon, &starts)?;
//! println!("mean = {:.4} ± {:.4}", result.mean, result.std_dev);
//! # Result::<(), LyapunovError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `estimate` returns `Result<LyapunovResult<T>, LyapunovError>`. Every error
//! (non-positive controls, empty or non-finite starting points, perturbation
//! dimension mismatch, parameters set twice) is reported before the map is
//! called for the first time. A separation that collapses to exactly zero is
//! not an error; it yields a non-finite exponent and
//! `first_non_finite_block` records where it happened.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! lyapunov = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - Benettin, G., Galgani, L., Giorgilli, A., Strelcyn, J.-M. (1980). "Lyapunov
//!   Characteristic Exponents for smooth dynamical systems and for Hamiltonian systems"
//! - Wolf, A., Swift, J. B., Swinney, H. L., Vastano, J. A. (1985). "Determining
//!   Lyapunov exponents from a time series"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure vector operations.
mod math;

// Layer 3: Systems - the map contract and reference maps.
mod systems;

// Layer 4: Evaluation - aggregation and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

pub use api::largest_lyapunov_exponent;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Ensemble, Single},
        ConvergenceDiagnostics, DynamicalMap, EnsembleResult, HenonMap, LinearScaling,
        LogisticMap, LyapunovBuilder as Lyapunov, LyapunovConfig, LyapunovError, LyapunovOutput,
        LyapunovResult, OutputMode, Perturbation, Timed, largest_lyapunov_exponent,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod systems {
        pub use crate::systems::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
