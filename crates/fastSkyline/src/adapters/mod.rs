//! Layer 6: Adapters
//!
//! Parallel execution builders wrapping the sequential adapter of the
//! `skyline` crate and injecting the parallel filter passes at fit time.

/// Shared-memory skyline adapter.
pub mod shared;

/// Distributed skyline adapter.
pub mod distributed;
