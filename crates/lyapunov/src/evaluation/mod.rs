//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns the raw per-block log-divergences into the quantities a
//! caller reads: the exponent, the running convergence trace, and summary
//! diagnostics describing how settled the trace is.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Systems
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exponent aggregation and convergence traces.
pub mod convergence;

/// Convergence diagnostics.
pub mod diagnostics;
