//! Immutable row-major point table.
//!
//! ## Purpose
//!
//! This module defines [`PointSet`], the input of every filtering strategy:
//! N points of D coordinates each, stored point-major in one contiguous
//! buffer so that point `i` is the slice `coords[i * D..(i + 1) * D]`.
//!
//! ## Design notes
//!
//! * **Immutable**: No method hands out mutable access once constructed.
//! * **Self-validating**: Every constructor enforces the invariants below.
//! * **Generics**: Generic over `Float` coordinate types.
//!
//! ## Invariants
//!
//! * `dims >= 2`.
//! * `coords.len() == len * dims`.
//! * No coordinate is NaN.
//!
//! ## Non-goals
//!
//! * This module does not parse text (see `format`).
//! * This module does not index points spatially.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice::ChunksExact;
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::{coordinate_count, try_with_capacity};
use crate::primitives::errors::SkylineError;

/// Smallest dimensionality accepted for a point set.
pub const MIN_DIMS: usize = 2;

// ============================================================================
// Point Set
// ============================================================================

/// N points × D coordinates, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
    coords: Vec<T>,
    dims: usize,
    len: usize,
}

impl<T: Float> PointSet<T> {
    /// Build a point set from a flat, point-major coordinate buffer.
    pub fn from_flat(dims: usize, coords: Vec<T>) -> Result<Self, SkylineError> {
        if dims < MIN_DIMS {
            return Err(SkylineError::InvalidDimension(dims as i64));
        }
        if coords.len() % dims != 0 {
            return Err(SkylineError::ShapeMismatch {
                len: coords.len(),
                dims,
            });
        }

        if let Some(pos) = coords.iter().position(|c| c.is_nan()) {
            return Err(SkylineError::InvalidNumericValue {
                point: pos / dims,
                coordinate: pos % dims,
            });
        }

        let len = coords.len() / dims;
        Ok(Self { coords, dims, len })
    }

    /// Build a point set from individual rows of equal length.
    pub fn from_rows<R: AsRef<[T]>>(dims: usize, rows: &[R]) -> Result<Self, SkylineError> {
        if dims < MIN_DIMS {
            return Err(SkylineError::InvalidDimension(dims as i64));
        }

        let total = coordinate_count(rows.len(), dims)?;
        let mut coords = try_with_capacity(total, "point buffer")?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dims {
                return Err(SkylineError::RaggedRow {
                    row,
                    expected: dims,
                    got: values.len(),
                });
            }
            coords.extend_from_slice(values);
        }

        Self::from_flat(dims, coords)
    }

    /// An empty point set of the given dimensionality.
    pub fn empty(dims: usize) -> Result<Self, SkylineError> {
        Self::from_flat(dims, Vec::new())
    }

    /// Number of points (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of coordinates per point (D).
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Coordinates of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &[T] {
        let start = i * self.dims;
        &self.coords[start..start + self.dims]
    }

    /// Iterate over points in input order.
    #[inline]
    pub fn iter(&self) -> ChunksExact<'_, T> {
        self.coords.chunks_exact(self.dims)
    }

    /// The flat, point-major coordinate buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    /// Copy the points at `indices` (in the given order) into a new set.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= self.len()`.
    pub fn select(&self, indices: &[usize]) -> Result<Self, SkylineError> {
        let total = coordinate_count(indices.len(), self.dims)?;
        let mut coords = try_with_capacity(total, "point buffer")?;
        for &i in indices {
            coords.extend_from_slice(self.point(i));
        }
        Ok(Self {
            coords,
            dims: self.dims,
            len: indices.len(),
        })
    }

    /// Consume the set and return the flat coordinate buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.coords
    }
}

impl<'a, T: Float> IntoIterator for &'a PointSet<T> {
    type Item = &'a [T];
    type IntoIter = ChunksExact<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
