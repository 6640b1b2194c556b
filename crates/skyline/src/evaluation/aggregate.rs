//! Merging membership information into the final skyline.
//!
//! ## Purpose
//!
//! This module provides the result aggregation step shared by every
//! strategy: reducing several membership vectors into one, and extracting
//! the surviving points from the point set.
//!
//! ## Design notes
//!
//! * **Associative reduction**: Logical AND is associative and commutative,
//!   so local vectors may be merged in any arrival order.
//! * **Order preserving**: Survivors are emitted in original input order,
//!   duplicates included.
//!
//! ## Invariants
//!
//! * A point survives the reduction iff every input vector keeps it.
//! * The number of extracted survivors equals the membership count.
//!
//! ## Non-goals
//!
//! * This module does not format output text (see `format`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SkylineError;
use crate::primitives::membership::MembershipVector;
use crate::primitives::points::PointSet;

// ============================================================================
// Survivors
// ============================================================================

/// Points that survived filtering, with their original indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Survivors<T> {
    /// Surviving points in original input order.
    pub points: PointSet<T>,

    /// Original index of each surviving point.
    pub indices: Vec<usize>,
}

// ============================================================================
// Result Aggregator
// ============================================================================

/// Combines membership vectors and extracts survivors.
pub struct ResultAggregator;

impl ResultAggregator {
    /// Reduce `locals` position-wise with logical AND.
    ///
    /// The reduction of zero vectors is the all-set vector of length `n`.
    pub fn reduce_and<I>(n: usize, locals: I) -> Result<MembershipVector, SkylineError>
    where
        I: IntoIterator<Item = MembershipVector>,
    {
        let mut acc = MembershipVector::all(n)?;
        for local in locals {
            acc.and_assign(&local)?;
        }
        Ok(acc)
    }

    /// Extract the members of `membership` from `points`, in input order.
    pub fn survivors<T: Float>(
        points: &PointSet<T>,
        membership: &MembershipVector,
    ) -> Result<Survivors<T>, SkylineError> {
        if membership.len() != points.len() {
            return Err(SkylineError::MembershipLengthMismatch {
                expected: points.len(),
                got: membership.len(),
            });
        }

        let indices: Vec<usize> = membership.members().collect();
        let points = points.select(&indices)?;
        Ok(Survivors { points, indices })
    }
}
