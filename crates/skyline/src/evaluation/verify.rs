//! Skyline certificate checking.
//!
//! ## Purpose
//!
//! This module checks that a membership vector is exactly the skyline of a
//! point set: no member is dominated by any point, and every non-member is
//! dominated by at least one member. It is independent of the strategy that
//! produced the vector and is used to validate outputs.
//!
//! ## Non-goals
//!
//! * This module is not on the hot path; it is O(N²·D) like the sweep itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::dominance::{Dominance, compare};
use crate::primitives::membership::MembershipVector;
use crate::primitives::points::PointSet;

/// First violation found while checking a membership vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Vector and point set have different lengths.
    LengthMismatch,

    /// Member `member` is dominated by point `by`.
    DominatedMember {
        /// Index of the dominated member.
        member: usize,
        /// Index of a dominating point.
        by: usize,
    },

    /// Non-member `point` is not dominated by any member.
    UndominatedOutsider {
        /// Index of the excluded point.
        point: usize,
    },
}

/// Check that `membership` is the skyline of `points`.
pub fn verify_skyline<T: Float>(
    points: &PointSet<T>,
    membership: &MembershipVector,
) -> Result<(), Violation> {
    if membership.len() != points.len() {
        return Err(Violation::LengthMismatch);
    }

    for (i, p) in points.iter().enumerate() {
        let member = membership.is_member(i);
        let mut covered = false;

        for (j, q) in points.iter().enumerate() {
            if compare(q, p) != Dominance::Dominates {
                continue;
            }
            if member {
                return Err(Violation::DominatedMember { member: i, by: j });
            }
            if membership.is_member(j) {
                covered = true;
                break;
            }
        }

        if !member && !covered {
            return Err(Violation::UndominatedOutsider { point: i });
        }
    }

    Ok(())
}
