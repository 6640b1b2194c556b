//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a skyline computation: it validates the
//! configuration, dispatches to the sequential kernel or to an injected
//! filter pass, and packages the outcome.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for skyline filtering.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for skyline operations.
pub mod output;
