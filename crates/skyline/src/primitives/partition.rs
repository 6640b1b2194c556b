//! Contiguous index-range partitioning.
//!
//! ## Purpose
//!
//! This module defines the partition descriptor shared by both parallel
//! strategies: a half-open range of point indices owned by one worker. The
//! shared-memory strategy partitions the *target* indices of each inner
//! scan; the distributed strategy partitions the *candidate* indices once.
//!
//! ## Key concepts
//!
//! * **Block size**: `n / workers` (integer division).
//! * **Remainder**: The last block absorbs the `n % workers` leftover indices.
//!
//! ## Invariants
//!
//! * Blocks tile `[0, n)` in ascending order with no gaps or overlaps.
//! * Exactly `workers` blocks are produced; leading blocks may be empty when `n < workers`.
//!
//! ## Non-goals
//!
//! * Load balancing by work estimate (blocks are equal-sized by index count).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Range;

// Internal dependencies
use crate::primitives::errors::SkylineError;

// ============================================================================
// Partition Descriptor
// ============================================================================

/// Half-open index range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    /// First index in the range.
    pub start: usize,

    /// One past the last index in the range.
    pub end: usize,
}

impl Partition {
    /// Create a range; `start` must not exceed `end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The range `[0, n)`.
    #[inline]
    pub fn full(n: usize) -> Self {
        Self::new(0, n)
    }

    /// Number of indices in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `i` lies inside the range.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.start <= i && i < self.end
    }

    /// The range as a `core::ops::Range`.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Block owned by `rank` when `[0, n)` is split across `workers`.
    pub fn for_rank(n: usize, workers: usize, rank: usize) -> Result<Self, SkylineError> {
        if workers == 0 {
            return Err(SkylineError::InvalidWorkerCount(workers));
        }
        debug_assert!(rank < workers);

        let block = n / workers;
        let start = rank * block;
        let end = if rank + 1 == workers { n } else { start + block };
        Ok(Self::new(start, end))
    }

    /// All blocks of `[0, n)` split across `workers`, in rank order.
    pub fn blocks(n: usize, workers: usize) -> Result<Vec<Self>, SkylineError> {
        (0..workers.max(1))
            .map(|rank| Self::for_rank(n, workers, rank))
            .collect()
    }
}
