//! Tests for the text input and output format.
//!
//! These tests verify reading and writing of point sets:
//! - Header parsing (dimension line, point count)
//! - Free-form whitespace between coordinates
//! - Every class of format error
//! - Six-digit output that can be read back
//!
//! ## Test Organization
//!
//! 1. **Parsing** - Valid inputs
//! 2. **Format Errors** - Invalid inputs
//! 3. **Writing** - Output text and round trip through the filter

use approx::assert_relative_eq;

use skyline::prelude::*;

// ============================================================================
// Parsing Tests
// ============================================================================

/// Test a well-formed input.
#[test]
fn test_parse_basic() {
    let text = "2\n4\n3 1\n1 3\n2 2\n0 0\n";
    let points: PointSet<f64> = parse_points(text).unwrap();

    assert_eq!(points.dims(), 2);
    assert_eq!(points.len(), 4);
    assert_eq!(points.point(2), &[2.0, 2.0]);
}

/// Test that the rest of the dimension line is ignored.
#[test]
fn test_parse_ignores_rest_of_first_line() {
    let text = "3 generated by inputgen 42 43\n1\n0.5 1.5 2.5\n";
    let points: PointSet<f32> = parse_points(text).unwrap();

    assert_eq!(points.dims(), 3);
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points.point(0)[2], 2.5_f32);
}

/// Test that coordinates may be split across lines arbitrarily.
#[test]
fn test_parse_free_whitespace() {
    let text = "2\n  3 1.25\n-4\t5e-1\n\n 6 7 8\n";
    let points: PointSet<f64> = parse_points(text).unwrap();

    assert_eq!(points.len(), 3);
    assert_relative_eq!(points.point(0)[0], 1.25);
    assert_relative_eq!(points.point(0)[1], -4.0);
    assert_relative_eq!(points.point(1)[0], 0.5);
    assert_eq!(points.point(2), &[7.0, 8.0]);
}

/// Test that an empty point list is valid.
#[test]
fn test_parse_zero_points() {
    let points: PointSet<f64> = parse_points("5\n0\n").unwrap();
    assert!(points.is_empty());
    assert_eq!(points.dims(), 5);
}

/// Test reading through `std::io::Read`.
#[test]
fn test_read_points_from_reader() {
    let bytes: &[u8] = b"2\n2\n1 2\n3 4\n";
    let points: PointSet<f64> = read_points(bytes).unwrap();
    assert_eq!(points.len(), 2);
}

// ============================================================================
// Format Error Tests
// ============================================================================

/// Test a dimension below two.
#[test]
fn test_parse_dimension_too_small() {
    let err = parse_points::<f64>("1\n3\n1\n2\n3\n").unwrap_err();
    assert_eq!(err, SkylineError::InvalidDimension(1));
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = parse_points::<f64>("-2\n0\n").unwrap_err();
    assert_eq!(err, SkylineError::InvalidDimension(-2));
}

/// Test a negative point count.
#[test]
fn test_parse_negative_count() {
    let err = parse_points::<f64>("2\n-1\n").unwrap_err();
    assert_eq!(err, SkylineError::InvalidPointCount(-1));
    assert_eq!(err.kind(), ErrorKind::Format);
}

/// Test empty input.
#[test]
fn test_parse_empty_input() {
    let err = parse_points::<f64>("").unwrap_err();
    assert!(matches!(err, SkylineError::MissingToken { ref field } if field == "dimension"));
}

/// Test input that ends after the dimension line.
#[test]
fn test_parse_missing_count() {
    let err = parse_points::<f64>("2\n").unwrap_err();
    assert!(matches!(err, SkylineError::MissingToken { ref field } if field == "number of points"));
}

/// Test malformed header tokens.
#[test]
fn test_parse_malformed_header() {
    let err = parse_points::<f64>("two\n1\n1 2\n").unwrap_err();
    assert!(matches!(err, SkylineError::MalformedToken { ref token, .. } if token == "two"));

    let err = parse_points::<f64>("2\n1.5\n1 2\n").unwrap_err();
    assert!(matches!(err, SkylineError::MalformedToken { ref field, .. } if field == "number of points"));
}

/// Test truncated point data.
#[test]
fn test_parse_truncated_points() {
    let err = parse_points::<f64>("2\n3\n1 2\n3 4\n5\n").unwrap_err();
    assert!(
        matches!(err, SkylineError::MissingToken { ref field } if field == "coordinate 1 of point 2")
    );
    assert_eq!(err.kind(), ErrorKind::Format);
}

/// Test a malformed coordinate.
#[test]
fn test_parse_malformed_coordinate() {
    let err = parse_points::<f64>("2\n2\n1 2\n3 x\n").unwrap_err();
    assert_eq!(
        err,
        SkylineError::MalformedToken {
            field: "coordinate 1 of point 1".to_string(),
            token: "x".to_string(),
        }
    );
}

/// Test that NaN coordinates are rejected after parsing.
#[test]
fn test_parse_nan_rejected() {
    let err = parse_points::<f64>("2\n1\nNaN 1\n").unwrap_err();
    assert!(matches!(err, SkylineError::InvalidNumericValue { point: 0, coordinate: 0 }));
}

/// Test that an impossible point count fails before reading coordinates.
#[test]
fn test_parse_impossible_count() {
    let err = parse_points::<f64>("2\n9223372036854775807\n1 2\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Allocation);
}

// ============================================================================
// Writing Tests
// ============================================================================

/// Test the exact output text.
#[test]
fn test_write_skyline_text() {
    let points: PointSet<f64> = parse_points("2\n4\n3 1\n1 3\n2 2\n0 0\n").unwrap();
    let result = Skyline::new().adapter(Sequential).build().unwrap().fit(&points).unwrap();

    let mut out = Vec::new();
    write_skyline(&result, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "2\n3\n3.000000 1.000000\n1.000000 3.000000\n2.000000 2.000000\n"
    );
    assert_eq!(text, result.to_string());
}

/// Test that an empty skyline prints only the header.
#[test]
fn test_write_empty_skyline() {
    let points: PointSet<f32> = parse_points("3\n0\n").unwrap();
    let result = Skyline::new().adapter(Sequential).build().unwrap().fit(&points).unwrap();
    assert_eq!(result.to_string(), "3\n0\n");
}

/// Test that output can be fed back as input and filters to itself.
#[test]
fn test_output_is_valid_input() {
    let text = "3\n5\n1 2 3\n3 2 1\n0 0 0\n2 2 2\n1 1 1\n";
    let model = Skyline::new().adapter(Sequential).build().unwrap();

    let first = model.fit(&parse_points::<f64>(text).unwrap()).unwrap();
    let second = model
        .fit(&parse_points::<f64>(&first.to_string()).unwrap())
        .unwrap();

    assert_eq!(first.count, 3);
    assert_eq!(second.count, first.count);
    assert_eq!(second.points, first.points);
}
