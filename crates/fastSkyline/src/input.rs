//! Input abstractions for skyline computation.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for skyline inputs, allowing
//! the `fit` method to accept a ready [`PointSet`], row collections, or a
//! two-dimensional `ndarray` array through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: A `PointSet` is borrowed as is.
//! * **Interoperability**: Bridges standard Rust collections and `ndarray`.
//! * **Layout independent**: Arrays are copied in logical row-major order,
//!   so transposed or sliced views are accepted.
//!
//! ## Invariants
//!
//! * Rows are points and columns are coordinates.
//! * Every conversion enforces the `PointSet` invariants.
//! * An empty row collection is an empty point set of dimension 2.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;
use std::borrow::Cow;

// Export dependencies from skyline crate
use skyline::internals::primitives::buffer::{coordinate_count, try_with_capacity};
use skyline::internals::primitives::errors::SkylineError;
use skyline::internals::primitives::points::{MIN_DIMS, PointSet};

/// Trait for types that can be used as input for skyline computation.
pub trait SkylineInput<T: Float> {
    /// View or convert the input as a point set.
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError>;
}

impl<T: Float> SkylineInput<T> for PointSet<T> {
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float, const D: usize> SkylineInput<T> for [[T; D]] {
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError> {
        PointSet::from_rows(D, self).map(Cow::Owned)
    }
}

impl<T: Float, const D: usize> SkylineInput<T> for Vec<[T; D]> {
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError> {
        self.as_slice().as_point_set()
    }
}

impl<T: Float> SkylineInput<T> for [Vec<T>] {
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError> {
        // The first row fixes the dimensionality; no rows is an empty set.
        match self.first() {
            Some(row) => PointSet::from_rows(row.len(), self).map(Cow::Owned),
            None => PointSet::empty(MIN_DIMS).map(Cow::Owned),
        }
    }
}

impl<T: Float> SkylineInput<T> for Vec<Vec<T>> {
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError> {
        self.as_slice().as_point_set()
    }
}

impl<T: Float, S> SkylineInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_point_set(&self) -> Result<Cow<'_, PointSet<T>>, SkylineError> {
        let (rows, dims) = self.dim();
        let mut coords = try_with_capacity(coordinate_count(rows, dims)?, "point buffer")?;
        coords.extend(self.iter().copied());
        PointSet::from_flat(dims, coords).map(Cow::Owned)
    }
}
