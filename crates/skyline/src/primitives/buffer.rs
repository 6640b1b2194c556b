//! Fallible buffer allocation for point and membership storage.
//!
//! ## Purpose
//!
//! This module centralizes every large allocation performed by the crate so
//! that an impossible request (e.g., a declared point count whose buffer does
//! not fit in memory) surfaces as [`SkylineError::AllocationFailed`] instead
//! of aborting the process.
//!
//! ## Design notes
//!
//! * **Fallible**: Uses `Vec::try_reserve_exact` and checked multiplication.
//! * **Exact**: Capacity matches the request; buffers are never grown afterwards.
//!
//! ## Non-goals
//!
//! * Buffer recycling across runs (each computation owns its buffers).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SkylineError;

/// Reserve an empty vector able to hold exactly `elements` items.
pub fn try_with_capacity<U>(elements: usize, what: &'static str) -> Result<Vec<U>, SkylineError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(elements)
        .map_err(|_| SkylineError::AllocationFailed { what, elements })?;
    Ok(buf)
}

/// Allocate a vector of `elements` copies of `value`.
pub fn try_filled<U: Clone>(
    value: U,
    elements: usize,
    what: &'static str,
) -> Result<Vec<U>, SkylineError> {
    let mut buf = try_with_capacity(elements, what)?;
    buf.resize(elements, value);
    Ok(buf)
}

/// Number of coordinates of a `points × dims` table, or an allocation error on overflow.
pub fn coordinate_count(points: usize, dims: usize) -> Result<usize, SkylineError> {
    points
        .checked_mul(dims)
        .ok_or(SkylineError::AllocationFailed {
            what: "point buffer",
            elements: usize::MAX,
        })
}
