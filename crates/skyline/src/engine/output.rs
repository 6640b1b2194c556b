//! Output types and result structures for skyline operations.
//!
//! ## Purpose
//!
//! This module defines the `SkylineResult` struct which encapsulates the
//! outcome of a skyline computation: the surviving points in input order,
//! their original indices, the membership vector and run metadata.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` producing the text output format,
//!   which is also a valid input, so results can be filtered again.
//! * **Generics**: Results are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `count == points.len() == indices.len() == membership.count()`.
//! * `indices` is strictly increasing.
//! * `points.dims() == dims`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::aggregate::Survivors;
use crate::primitives::backend::Backend;
use crate::primitives::membership::MembershipVector;
use crate::primitives::points::PointSet;

/// Number of fractional digits used when printing coordinates.
pub const COORDINATE_PRECISION: usize = 6;

// ============================================================================
// Result Structure
// ============================================================================

/// Skyline output: surviving points and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SkylineResult<T> {
    /// Dimensionality of every point (D).
    pub dims: usize,

    /// Number of surviving points (r).
    pub count: usize,

    /// Number of input points (N).
    pub input_len: usize,

    /// Surviving points in original input order.
    pub points: PointSet<T>,

    /// Original index of each surviving point.
    pub indices: Vec<usize>,

    /// Membership flag of every input point.
    pub membership: MembershipVector,

    /// Backend that produced the result.
    pub backend: Backend,

    /// Number of workers used.
    pub workers_used: usize,
}

impl<T: Float> SkylineResult<T> {
    /// Assemble a result from extracted survivors and run metadata.
    pub fn from_survivors(
        survivors: Survivors<T>,
        membership: MembershipVector,
        backend: Backend,
        workers_used: usize,
    ) -> Self {
        Self {
            dims: survivors.points.dims(),
            count: survivors.indices.len(),
            input_len: membership.len(),
            points: survivors.points,
            indices: survivors.indices,
            membership,
            backend,
            workers_used,
        }
    }

    /// Whether original point `i` belongs to the skyline.
    pub fn contains(&self, i: usize) -> bool {
        self.membership.is_member(i)
    }

    /// Number of points that were eliminated.
    pub fn eliminated(&self) -> usize {
        self.input_len - self.count
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SkylineResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.dims)?;
        writeln!(f, "{}", self.count)?;

        for point in self.points.iter() {
            for (k, coord) in point.iter().enumerate() {
                if k > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.prec$}", coord, prec = COORDINATE_PRECISION)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
