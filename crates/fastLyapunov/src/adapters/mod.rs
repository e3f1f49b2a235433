//! Layer 6: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for different
//! execution modes:
//!
//! - **Single**: One starting point from any supported container
//! - **Ensemble**: Many starting points, parallel by default

// Single starting point with flexible inputs.
pub mod single;

// Parallel multi-start ensembles.
pub mod ensemble;
