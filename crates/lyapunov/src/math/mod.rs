//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure vector arithmetic the estimator is built
//! from: Euclidean norms, differences, and rescaling. These functions are
//! independent of the estimation algorithm and carry no state.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Systems
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean vector operations.
pub mod vector;
