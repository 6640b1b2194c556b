//! Dominance filtering kernels.
//!
//! ## Purpose
//!
//! This module implements the O(N²·D) comparison sweep that computes the
//! skyline, split into building blocks that the parallel strategies reuse:
//!
//! * [`eliminate_dominated_by`]: the inner scan of one candidate over one
//!   block of targets.
//! * [`filter_candidates`]: the sequential kernel over a candidate range,
//!   skipping candidates that are already eliminated.
//! * [`filter_block_unshrinking`]: the local scan of one rank in the
//!   distributed strategy, which never skips candidates.
//!
//! ## Design notes
//!
//! * **Shared semantics**: The sequential and shared-memory paths call the
//!   same inner scan, so they cannot drift apart.
//! * **Skipping**: An eliminated point is never used as a dominator in the
//!   sequential kernel. This does not change the result because dominance is
//!   transitive.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The point set is never mutated.
//! * Membership flags only go from `true` to `false`.
//! * The returned survivor count equals the number of set flags.
//!
//! ## Non-goals
//!
//! * This module does not spawn threads or exchange messages.
//! * This module does not use spatial indexing or sorting.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::dominance::dominates;
use crate::primitives::errors::SkylineError;
use crate::primitives::membership::{MembershipBlock, MembershipVector};
use crate::primitives::partition::Partition;
use crate::primitives::points::PointSet;

// ============================================================================
// Inner Scan
// ============================================================================

/// Clear every member of `targets` dominated by point `candidate`.
///
/// Returns the number of flags cleared. Only indices inside the block are
/// read or written.
#[inline]
pub fn eliminate_dominated_by<T: Float>(
    points: &PointSet<T>,
    candidate: usize,
    targets: &mut MembershipBlock<'_>,
) -> usize {
    let p = points.point(candidate);
    let mut eliminated = 0;

    for j in targets.range().indices() {
        if targets.is_member(j) && dominates(p, points.point(j)) {
            targets.eliminate(j);
            eliminated += 1;
        }
    }

    eliminated
}

// ============================================================================
// Sequential Kernel
// ============================================================================

/// Run the sequential kernel for the candidates in `candidates`.
///
/// Every still-member candidate is compared against all N points. Returns
/// the number of points eliminated during this call.
pub fn filter_candidates<T: Float>(
    points: &PointSet<T>,
    candidates: Partition,
    membership: &mut MembershipVector,
) -> usize {
    let mut eliminated = 0;

    for i in candidates.indices() {
        if membership.is_member(i) {
            eliminated += eliminate_dominated_by(points, i, &mut membership.block_mut());
        }
    }

    eliminated
}

/// Compute the skyline sequentially.
///
/// Returns the membership vector and the number of surviving points.
pub fn skyline<T: Float>(points: &PointSet<T>) -> Result<(MembershipVector, usize), SkylineError> {
    let n = points.len();
    let mut membership = MembershipVector::all(n)?;
    let eliminated = filter_candidates(points, Partition::full(n), &mut membership);
    Ok((membership, n - eliminated))
}

// ============================================================================
// Unshrinking Block Scan
// ============================================================================

/// Local scan of one rank: candidates in `candidates`, targets all N points.
///
/// Starts from an all-set local vector and clears every point dominated by
/// any candidate of the block. Candidates are never skipped, even once this
/// scan has cleared their own flag.
pub fn filter_block_unshrinking<T: Float>(
    points: &PointSet<T>,
    candidates: Partition,
) -> Result<MembershipVector, SkylineError> {
    let mut local = MembershipVector::all(points.len())?;

    for i in candidates.indices() {
        let p = points.point(i);
        for (j, q) in points.iter().enumerate() {
            if dominates(p, q) {
                local.eliminate(j);
            }
        }
    }

    Ok(local)
}
