//! Layer 6: Adapters
//!
//! ## Purpose
//!
//! This layer provides the execution builders that turn a configured
//! [`SkylineBuilder`](crate::api::SkylineBuilder) into a runnable skyline
//! processor. The core crate ships the sequential adapter; extension crates
//! wrap it and inject parallel filter passes.
//!
//! ## Architecture
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sequential in-memory skyline adapter.
pub mod sequential;
