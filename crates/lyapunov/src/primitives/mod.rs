//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures shared by the rest of
//! the crate: error types, the perturbation configuration, and the working
//! buffers that hold the two trajectories. It has zero internal dependencies
//! within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Initial perturbation configuration.
pub mod perturbation;

/// Trajectory buffers.
pub mod buffer;
