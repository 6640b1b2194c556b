//! Layer 5: Engine
//!
//! Parallel filter passes injected into the `skyline` executor.

/// Shared-memory filter pass on a dedicated rayon pool.
#[cfg(feature = "cpu")]
pub mod executor;

/// Distributed filter pass over message-passing ranks.
pub mod distributed;
