#![cfg(feature = "dev")]
//! Tests for the primitive data structures.
//!
//! These tests verify the building blocks shared by all strategies:
//! - `Partition` block layout and remainder handling
//! - `MembershipVector` monotone elimination, merging and disjoint views
//! - `PointSet` construction and validation
//!
//! ## Test Organization
//!
//! 1. **Partition** - Block boundaries
//! 2. **Membership** - Flags, AND-merge and block views
//! 3. **Point Set** - Constructors and accessors

use skyline::internals::primitives::errors::{ErrorKind, SkylineError};
use skyline::internals::primitives::membership::MembershipVector;
use skyline::internals::primitives::partition::Partition;
use skyline::internals::primitives::points::PointSet;

// ============================================================================
// Partition Tests
// ============================================================================

/// Test the documented layout for N=10 split across 3 workers.
#[test]
fn test_partition_remainder_goes_to_last_block() {
    let blocks = Partition::blocks(10, 3).unwrap();
    assert_eq!(
        blocks,
        vec![
            Partition::new(0, 3),
            Partition::new(3, 6),
            Partition::new(6, 10)
        ]
    );
}

/// Test that blocks tile the range for many shapes.
#[test]
fn test_partition_tiles_range() {
    for n in [0usize, 1, 2, 7, 10, 64, 101] {
        for workers in 1..=9 {
            let blocks = Partition::blocks(n, workers).unwrap();
            assert_eq!(blocks.len(), workers);

            let mut next = 0;
            for block in &blocks {
                assert_eq!(block.start, next, "gap or overlap for n={n} w={workers}");
                next = block.end;
            }
            assert_eq!(next, n);
        }
    }
}

/// Test more workers than points: leading blocks are empty.
#[test]
fn test_partition_more_workers_than_points() {
    let blocks = Partition::blocks(3, 5).unwrap();
    assert!(blocks[..4].iter().all(Partition::is_empty));
    assert_eq!(blocks[4], Partition::new(0, 3));
}

/// Test that zero workers is rejected.
#[test]
fn test_partition_zero_workers() {
    let err = Partition::for_rank(10, 0, 0).unwrap_err();
    assert_eq!(err, SkylineError::InvalidWorkerCount(0));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// Test single-range helpers.
#[test]
fn test_partition_helpers() {
    let p = Partition::new(3, 6);
    assert_eq!(p.len(), 3);
    assert!(p.contains(3));
    assert!(p.contains(5));
    assert!(!p.contains(6));
    assert_eq!(p.indices().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert!(Partition::full(0).is_empty());
}

// ============================================================================
// Membership Tests
// ============================================================================

/// Test that a fresh vector is all members and elimination is monotone.
#[test]
fn test_membership_elimination() {
    let mut m = MembershipVector::all(4).unwrap();
    assert_eq!(m.count(), 4);

    assert!(m.eliminate(2));
    assert!(!m.eliminate(2), "second elimination reports no change");
    assert!(!m.is_member(2));
    assert_eq!(m.count(), 3);
    assert_eq!(m.members().collect::<Vec<_>>(), vec![0, 1, 3]);
}

/// Test the position-wise AND merge.
#[test]
fn test_membership_and_assign() {
    let mut a = MembershipVector::all(5).unwrap();
    let mut b = MembershipVector::all(5).unwrap();
    a.eliminate(0);
    a.eliminate(3);
    b.eliminate(3);
    b.eliminate(4);

    a.and_assign(&b).unwrap();
    assert_eq!(a.as_slice(), &[false, true, true, false, false]);
}

/// Test that vectors of different lengths cannot be merged.
#[test]
fn test_membership_and_assign_length_mismatch() {
    let mut a = MembershipVector::all(3).unwrap();
    let b = MembershipVector::all(4).unwrap();
    let err = a.and_assign(&b).unwrap_err();
    assert_eq!(
        err,
        SkylineError::MembershipLengthMismatch {
            expected: 3,
            got: 4
        }
    );
    assert_eq!(err.kind(), ErrorKind::Collective);
}

/// Test that block views address global indices and stay disjoint.
#[test]
fn test_membership_blocks_mut() {
    let mut m = MembershipVector::all(10).unwrap();
    let parts = Partition::blocks(10, 3).unwrap();

    {
        let mut views = m.blocks_mut(&parts);
        assert_eq!(views.len(), 3);
        assert_eq!(views[2].range(), Partition::new(6, 10));

        views[0].eliminate(1);
        views[1].eliminate(5);
        views[2].eliminate(9);
        assert!(!views[2].is_member(9));
        assert!(views[2].is_member(6));
    }

    assert_eq!(m.members().collect::<Vec<_>>(), vec![0, 2, 3, 4, 6, 7, 8]);
}

/// Test the empty vector.
#[test]
fn test_membership_empty() {
    let m = MembershipVector::all(0).unwrap();
    assert!(m.is_empty());
    assert_eq!(m.count(), 0);
    assert!(m.into_vec().is_empty());
}

// ============================================================================
// Point Set Tests
// ============================================================================

/// Test construction from a flat buffer and point access.
#[test]
fn test_points_from_flat() {
    let set = PointSet::from_flat(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.dims(), 3);
    assert_eq!(set.point(1), &[4.0, 5.0, 6.0]);
    assert_eq!(set.iter().count(), 2);
}

/// Test that the flat buffer must hold whole points.
#[test]
fn test_points_shape_mismatch() {
    let err = PointSet::from_flat(2, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, SkylineError::ShapeMismatch { len: 3, dims: 2 });
    assert_eq!(err.kind(), ErrorKind::Format);
}

/// Test that fewer than two dimensions is rejected.
#[test]
fn test_points_dimension_too_small() {
    let err = PointSet::<f64>::from_flat(1, vec![1.0, 2.0]).unwrap_err();
    assert_eq!(err, SkylineError::InvalidDimension(1));
}

/// Test that ragged rows are rejected with their position.
#[test]
fn test_points_ragged_rows() {
    let rows = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
    let err = PointSet::from_rows(2, &rows).unwrap_err();
    assert_eq!(
        err,
        SkylineError::RaggedRow {
            row: 1,
            expected: 2,
            got: 1
        }
    );
}

/// Test that NaN coordinates are rejected with their position.
#[test]
fn test_points_nan_rejected() {
    let err = PointSet::from_flat(2, vec![0.0, 1.0, 2.0, f64::NAN]).unwrap_err();
    assert_eq!(
        err,
        SkylineError::InvalidNumericValue {
            point: 1,
            coordinate: 1
        }
    );
    assert_eq!(err.kind(), ErrorKind::Format);
}

/// Test subset extraction preserves the requested order.
#[test]
fn test_points_select() {
    let set = PointSet::from_rows(2, &[[0.0, 0.5], [1.0, 1.5], [2.0, 2.5]]).unwrap();
    let picked = set.select(&[2, 0]).unwrap();
    assert_eq!(picked.len(), 2);
    assert_eq!(picked.into_inner(), vec![2.0, 2.5, 0.0, 0.5]);
}

/// Test subset extraction with an index past the end.
#[test]
#[should_panic]
fn test_points_select_out_of_range() {
    let set = PointSet::from_rows(2, &[[0.0, 0.5], [1.0, 1.5]]).unwrap();
    let _ = set.select(&[0, 2]);
}

/// Test the empty set.
#[test]
fn test_points_empty() {
    let set = PointSet::<f32>::empty(4).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.dims(), 4);
    assert_eq!((&set).into_iter().count(), 0);
}
