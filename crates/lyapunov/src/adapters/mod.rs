//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the user-facing execution modes built on the engine:
//!
//! - **Single**: One starting point, one estimate
//! - **Ensemble**: Independent estimates from several starting points, run sequentially
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Systems
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single starting point estimation.
pub mod single;

/// Multi-start ensemble estimation.
pub mod ensemble;
