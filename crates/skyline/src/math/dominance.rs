//! Pareto dominance between two points.
//!
//! ## Purpose
//!
//! This module provides the dominance predicate that defines the skyline:
//! `p` dominates `q` iff `p[k] >= q[k]` for every dimension `k` and
//! `p[k] > q[k]` for at least one.
//!
//! ## Design notes
//!
//! * **Single pass**: Records "strictly better somewhere" while scanning and
//!   returns as soon as one coordinate is worse.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Irreflexive: `dominates(p, p)` is `false`.
//! * Asymmetric: `dominates(p, q)` and `dominates(q, p)` are never both `true`.
//! * Coordinate-wise equal points dominate neither each other.
//! * Transitive.
//!
//! ## Non-goals
//!
//! * This module does not validate that `p` and `q` have equal length.

// External dependencies
use num_traits::Float;

// ============================================================================
// Dominance Predicate
// ============================================================================

/// Returns `true` iff `p` dominates `q`.
///
/// Both slices must have the same length (the point dimensionality).
#[inline]
pub fn dominates<T: Float>(p: &[T], q: &[T]) -> bool {
    debug_assert_eq!(p.len(), q.len());

    let mut strictly_better = false;
    for (&pk, &qk) in p.iter().zip(q.iter()) {
        if pk < qk {
            return false;
        }
        if pk > qk {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Relationship between two points under the dominance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first point dominates the second.
    Dominates,

    /// The second point dominates the first.
    DominatedBy,

    /// The points are coordinate-wise equal.
    Equal,

    /// Each point is better in some dimension.
    Incomparable,
}

/// Classify the relationship between `p` and `q` in one pass.
pub fn compare<T: Float>(p: &[T], q: &[T]) -> Dominance {
    debug_assert_eq!(p.len(), q.len());

    let mut p_better = false;
    let mut q_better = false;
    for (&pk, &qk) in p.iter().zip(q.iter()) {
        if pk > qk {
            p_better = true;
        } else if pk < qk {
            q_better = true;
        }
        if p_better && q_better {
            return Dominance::Incomparable;
        }
    }

    match (p_better, q_better) {
        (true, false) => Dominance::Dominates,
        (false, true) => Dominance::DominatedBy,
        _ => Dominance::Equal,
    }
}
