//! Layer 3: Systems
//!
//! # Purpose
//!
//! This layer defines the contract between the estimator and the dynamical
//! system it measures: a single state-to-state transition. It also ships a
//! very small set of reference maps with well-known exponents, used for
//! validation and documentation. A full system catalogue is out of scope.
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
//! Layer 3: Systems ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The one-step map contract.
pub mod map;

/// Reference maps with known exponents.
pub mod reference;
