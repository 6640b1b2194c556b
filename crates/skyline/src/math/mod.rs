//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure order-theoretic predicates used by every
//! filtering strategy. It holds no state and performs no allocation.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pareto dominance between points.
pub mod dominance;
