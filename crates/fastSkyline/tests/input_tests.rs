//! Tests for the input abstraction.
//!
//! These tests verify that every supported container converts to the same
//! point set and that invalid shapes are rejected.

use approx::assert_relative_eq;
use ndarray::{Array2, array};

use fastSkyline::prelude::*;

/// Test that all containers describe the same points.
#[test]
fn test_inputs_agree() {
    let fixed: Vec<[f64; 2]> = vec![[3.0, 1.0], [1.0, 3.0], [2.0, 2.0], [0.0, 0.0]];
    let nested: Vec<Vec<f64>> = fixed.iter().map(|r| r.to_vec()).collect();
    let arr: Array2<f64> = array![[3.0, 1.0], [1.0, 3.0], [2.0, 2.0], [0.0, 0.0]];
    let set = PointSet::from_rows(2, &fixed).unwrap();

    let a = fixed.as_point_set().unwrap().into_owned();
    let b = nested.as_point_set().unwrap().into_owned();
    let c = arr.as_point_set().unwrap().into_owned();
    let d = set.as_point_set().unwrap().into_owned();

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a, d);
}

/// Test that a transposed array view is read in logical order.
#[test]
fn test_input_transposed_array() {
    // Columns are points here; the transpose makes them rows.
    let columns: Array2<f64> = array![[1.0, 4.0, 0.5], [2.0, 3.0, 0.5]];
    let view = columns.t();

    let points = view.as_point_set().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points.dims(), 2);
    assert_relative_eq!(points.point(1)[0], 4.0);
    assert_relative_eq!(points.point(1)[1], 3.0);
}

/// Test fitting an ndarray directly.
#[test]
fn test_fit_ndarray() {
    let arr: Array2<f32> = array![[1.0, 1.0, 1.0], [2.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
    let result = Skyline::new()
        .workers(2)
        .adapter(SharedMemory)
        .build()
        .unwrap()
        .fit(&arr)
        .unwrap();

    assert_eq!(result.indices, vec![0, 1]);
    assert_eq!(result.dims, 3);
}

/// Test rejection of ragged rows and too few columns.
#[test]
fn test_input_invalid_shapes() {
    let ragged = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
    assert!(matches!(
        ragged.as_point_set(),
        Err(SkylineError::RaggedRow { row: 1, .. })
    ));

    let narrow: Array2<f64> = Array2::zeros((4, 1));
    assert!(matches!(
        narrow.as_point_set(),
        Err(SkylineError::InvalidDimension(1))
    ));

    let flat_row = vec![vec![1.0_f64]];
    assert_eq!(
        flat_row.as_point_set().unwrap_err().kind(),
        ErrorKind::Format
    );
}

/// Test that an empty row collection filters to an empty skyline.
#[test]
fn test_input_empty_rows() {
    let empty: Vec<Vec<f64>> = Vec::new();
    let set = empty.as_point_set().unwrap();
    assert!(set.is_empty());
    assert_eq!(set.dims(), 2);

    let result = Skyline::new()
        .workers(3)
        .adapter(SharedMemory)
        .build()
        .unwrap()
        .fit(&empty)
        .unwrap();
    assert_eq!(result.count, 0);
    assert_eq!(result.input_len, 0);
}

/// Test that NaN inside an array is rejected.
#[test]
fn test_input_nan_array() {
    let arr: Array2<f64> = array![[0.0, 1.0], [f64::NAN, 2.0]];
    let err = Skyline::new()
        .workers(2)
        .adapter(Distributed)
        .build()
        .unwrap()
        .fit(&arr)
        .unwrap_err();
    assert_eq!(
        err,
        SkylineError::InvalidNumericValue {
            point: 1,
            coordinate: 0
        }
    );
}
