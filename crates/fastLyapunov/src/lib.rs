//! # fastLyapunov — Parallel Lyapunov Exponent Ensembles for Rust
//!
//! Extends the [`lyapunov`](https://docs.rs/lyapunov) crate with `rayon`-backed
//! ensembles and `ndarray` inputs. A single largest-exponent estimate is an
//! inherently sequential walk along two trajectories, but estimates from
//! different starting points are independent; `fastLyapunov` runs them on all
//! available cores.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastLyapunov::prelude::*;
//! use ndarray::array;
//!
//! let henon = HenonMap::<f64>::classical();
//!
//! // One starting point per row.
//! let starts = array![[0.0, 0.0], [0.1, 0.1], [-0.1, 0.2], [0.3, -0.1]];
//!
//! let ensemble = Lyapunov::new()
//!     .blocks(1_000)
//!     .transient_steps(200)
//!     .adapter(Ensemble)
//!     .build()?;
//!
//! let result = ensemble.estimate(&henon, &starts)?;
//! assert_eq!(result.runs.len(), 4);
//! println!("{}", result);
//! # Result::<(), LyapunovError>::Ok(())
//! ```
//!
//! ## Execution
//!
//! - Ensembles run in parallel by default; call `.parallel(false)` on the
//!   ensemble builder to run them on the calling thread.
//! - Results are bit-identical between the two modes and keep input order.
//! - Disabling the default `cpu` feature removes the `rayon` dependency and
//!   every ensemble runs sequentially.
//!
//! ## Logging
//!
//! Ensemble runs are wrapped in a `tracing` span named `lyapunov_ensemble`.
//! Install any `tracing` subscriber to see them; none is installed by default.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel and sequential ensemble execution.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

pub use input::{EnsembleInput, StateInput};

// Standard fastLyapunov prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Ensemble, Single},
        ConvergenceDiagnostics, DynamicalMap, EnsembleResult, HenonMap, LinearScaling,
        LogisticMap, LyapunovBuilder as Lyapunov, LyapunovError, LyapunovOutput,
        LyapunovResult, OutputMode, Perturbation, Timed,
    };
    pub use crate::input::{EnsembleInput, StateInput};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
