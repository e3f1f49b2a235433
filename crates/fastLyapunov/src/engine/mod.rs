//! Layer 5: Engine
//!
//! This layer provides the ensemble execution strategies used by the adapters:
//! a `rayon`-parallel one and a sequential fallback.

// Ensemble execution across starting points.
pub mod executor;
