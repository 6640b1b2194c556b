//! Skyline membership flags with monotone elimination.
//!
//! ## Purpose
//!
//! This module defines [`MembershipVector`], one flag per point telling
//! whether the point is still a skyline candidate, and [`MembershipBlock`],
//! a mutable view over a contiguous index range used to hand disjoint
//! regions of the vector to different workers.
//!
//! ## Design notes
//!
//! * **Monotone**: Flags start `true` and can only be cleared. Neither type
//!   exposes a way to set a flag back to `true`, nor raw mutable slices.
//! * **Disjoint views**: [`MembershipVector::blocks_mut`] splits the flags
//!   along partition descriptors with `split_at_mut`, so concurrent writers
//!   never alias.
//! * **Mergeable**: Local vectors combine by position-wise logical AND.
//!
//! ## Invariants
//!
//! * The vector length equals the number of points it describes.
//! * A cleared flag is never set again.
//!
//! ## Non-goals
//!
//! * This module does not decide which points are dominated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::buffer::try_filled;
use crate::primitives::errors::SkylineError;
use crate::primitives::partition::Partition;

// ============================================================================
// Membership Vector
// ============================================================================

/// One membership flag per point; `true` means "still in the skyline".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipVector {
    flags: Vec<bool>,
}

impl MembershipVector {
    /// Allocate `n` flags, all set.
    pub fn all(n: usize) -> Result<Self, SkylineError> {
        Ok(Self {
            flags: try_filled(true, n, "membership vector")?,
        })
    }

    /// Number of flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the vector describes zero points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether point `i` is still a member.
    #[inline]
    pub fn is_member(&self, i: usize) -> bool {
        self.flags[i]
    }

    /// Clear the flag of point `i`. Returns `true` if it was set before.
    #[inline]
    pub fn eliminate(&mut self, i: usize) -> bool {
        core::mem::replace(&mut self.flags[i], false)
    }

    /// Number of flags still set.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Indices of the members, ascending.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
    }

    /// Read-only view of the flags.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// Merge `other` into `self` by position-wise logical AND.
    pub fn and_assign(&mut self, other: &MembershipVector) -> Result<(), SkylineError> {
        if other.len() != self.len() {
            return Err(SkylineError::MembershipLengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        for (mine, &theirs) in self.flags.iter_mut().zip(other.flags.iter()) {
            *mine &= theirs;
        }
        Ok(())
    }

    /// Mutable view over the whole vector.
    #[inline]
    pub fn block_mut(&mut self) -> MembershipBlock<'_> {
        MembershipBlock {
            offset: 0,
            flags: &mut self.flags,
        }
    }

    /// Split the vector into disjoint mutable views, one per partition.
    ///
    /// `parts` must tile `[0, len)` in ascending order, as produced by
    /// [`Partition::blocks`].
    pub fn blocks_mut(&mut self, parts: &[Partition]) -> Vec<MembershipBlock<'_>> {
        let mut views = Vec::with_capacity(parts.len());
        let mut rest: &mut [bool] = &mut self.flags;
        let mut consumed = 0;

        for part in parts {
            debug_assert_eq!(part.start, consumed, "partitions must be contiguous");
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(part.len());
            views.push(MembershipBlock {
                offset: part.start,
                flags: head,
            });
            rest = tail;
            consumed = part.end;
        }

        views
    }

    /// Consume the vector and return the raw flags.
    pub fn into_vec(self) -> Vec<bool> {
        self.flags
    }
}

// ============================================================================
// Membership Block
// ============================================================================

/// Mutable view over the flags of a contiguous index range.
///
/// Indices passed to the methods are global point indices.
#[derive(Debug)]
pub struct MembershipBlock<'a> {
    offset: usize,
    flags: &'a mut [bool],
}

impl MembershipBlock<'_> {
    /// Range of global indices covered by this view.
    #[inline]
    pub fn range(&self) -> Partition {
        Partition::new(self.offset, self.offset + self.flags.len())
    }

    /// Whether point `j` (global index) is still a member.
    #[inline]
    pub fn is_member(&self, j: usize) -> bool {
        self.flags[j - self.offset]
    }

    /// Clear the flag of point `j` (global index).
    #[inline]
    pub fn eliminate(&mut self, j: usize) {
        self.flags[j - self.offset] = false;
    }
}
