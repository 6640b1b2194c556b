//! Execution backend selection for extension crates.
//!
//! ## Purpose
//!
//! This module defines the `Backend` enum used to select how the filtering
//! pass is executed. The core `skyline` crate only implements the sequential
//! kernel; extension crates (like `fastSkyline`) provide the shared-memory
//! and distributed passes and inject them into the executor.
//!
//! ## Invariants
//!
//! * The default backend is always `Sequential`.
//!
//! ## Non-goals
//!
//! * This module does not provide parallel implementations (handled by external crates).

/// Execution backend hint for extension crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Single-threaded ground-truth kernel.
    #[default]
    Sequential,

    /// Per-candidate fan-out of the inner scan across threads.
    SharedMemory,

    /// Candidate-domain decomposition across ranks with broadcast and AND-reduce.
    Distributed,
}

impl Backend {
    /// Short lowercase name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::SharedMemory => "shared-memory",
            Self::Distributed => "distributed",
        }
    }
}
