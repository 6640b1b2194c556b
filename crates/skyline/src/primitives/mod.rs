//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by every other layer: the
//! point table, the membership flags, partition descriptors, buffer
//! allocation and the error type. It has zero internal dependencies within
//! the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Immutable point table.
pub mod points;

/// Membership flags.
pub mod membership;

/// Index-range partitioning.
pub mod partition;

/// Shared error types.
pub mod errors;

/// Execution backend configuration.
pub mod backend;

/// Fallible allocation.
pub mod buffer;
