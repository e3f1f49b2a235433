//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates an estimation run: it validates the request,
//! resolves the perturbation and the time step, drives the two trajectories
//! through the renormalization blocks, and defines the result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Systems
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Two-trajectory execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
