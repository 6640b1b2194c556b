#![cfg(feature = "dev")]
//! Tests for the execution engine and the sequential adapter.
//!
//! These tests verify the orchestration layer:
//! - Header and parameter validation
//! - Executor dispatch between the kernel and injected passes
//! - Builder duplicate detection
//! - Result metadata
//!
//! ## Test Organization
//!
//! 1. **Validator** - Header and parameter checks
//! 2. **Executor** - Dispatch and hook injection
//! 3. **Adapter** - Builder flow and result contents

use skyline::internals::algorithms::filter::skyline;
use skyline::internals::api::{Sequential, SkylineBuilder};
use skyline::internals::engine::executor::{SkylineConfig, SkylineExecutor};
use skyline::internals::engine::validator::Validator;
use skyline::internals::primitives::backend::Backend;
use skyline::internals::primitives::errors::{ErrorKind, SkylineError};
use skyline::internals::primitives::membership::MembershipVector;
use skyline::internals::primitives::points::PointSet;

fn sample() -> PointSet<f64> {
    PointSet::from_rows(2, &[[3.0, 1.0], [1.0, 3.0], [2.0, 2.0], [0.0, 0.0]]).unwrap()
}

/// Pass that keeps every point, used to observe hook dispatch.
fn keep_all(points: &PointSet<f64>, _workers: usize) -> Result<(MembershipVector, usize), SkylineError> {
    Ok((MembershipVector::all(points.len())?, points.len()))
}

/// Pass that always fails like a broken collective.
fn broken(_points: &PointSet<f64>, _workers: usize) -> Result<(MembershipVector, usize), SkylineError> {
    Err(SkylineError::collective("reduce", 2, "rank disconnected"))
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test dimension validation boundaries.
#[test]
fn test_validate_dimension() {
    assert_eq!(Validator::validate_dimension(2).unwrap(), 2);
    assert_eq!(Validator::validate_dimension(17).unwrap(), 17);
    assert_eq!(
        Validator::validate_dimension(1).unwrap_err(),
        SkylineError::InvalidDimension(1)
    );
    assert!(Validator::validate_dimension(0).is_err());
    assert!(Validator::validate_dimension(-5).is_err());
}

/// Test point count validation boundaries.
#[test]
fn test_validate_point_count() {
    assert_eq!(Validator::validate_point_count(0).unwrap(), 0);
    assert_eq!(
        Validator::validate_point_count(-3).unwrap_err(),
        SkylineError::InvalidPointCount(-3)
    );
}

/// Test worker count and duplicate validation.
#[test]
fn test_validate_parameters() {
    assert!(Validator::validate_workers(1).is_ok());
    assert_eq!(
        Validator::validate_workers(0).unwrap_err().kind(),
        ErrorKind::Configuration
    );
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("workers")).unwrap_err(),
        SkylineError::DuplicateParameter {
            parameter: "workers"
        }
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test that the default executor runs the sequential kernel.
#[test]
fn test_executor_sequential() {
    let points = sample();
    let output = SkylineExecutor::new().run(&points).unwrap();
    let (reference, r) = skyline(&points).unwrap();

    assert_eq!(output.membership, reference);
    assert_eq!(output.survivors, r);
    assert_eq!(output.backend, Backend::Sequential);
    assert_eq!(output.workers, 1);
}

/// Test that an injected pass replaces the kernel and receives the worker count.
#[test]
fn test_executor_custom_pass() {
    let points = sample();
    let config = SkylineConfig {
        workers: 4,
        backend: Backend::SharedMemory,
        custom_filter_pass: Some(keep_all as _),
    };
    let output = SkylineExecutor::run_with_config(&points, config).unwrap();

    assert_eq!(output.survivors, 4);
    assert_eq!(output.workers, 4);
    assert_eq!(output.backend, Backend::SharedMemory);
}

/// Test that a parallel backend without an injected pass is rejected.
#[test]
fn test_executor_backend_without_pass() {
    let points = sample();
    let err = SkylineExecutor::new()
        .backend(Backend::Distributed)
        .run(&points)
        .unwrap_err();
    assert_eq!(
        err,
        SkylineError::UnsupportedFeature {
            adapter: "Sequential",
            feature: "distributed"
        }
    );
}

/// Test that zero workers is rejected before any pass runs.
#[test]
fn test_executor_zero_workers() {
    let points = sample();
    let err = SkylineExecutor::new()
        .workers(0)
        .custom_filter_pass(Some(broken))
        .run(&points)
        .unwrap_err();
    assert_eq!(err, SkylineError::InvalidWorkerCount(0));
}

/// Test that pass failures propagate unchanged.
#[test]
fn test_executor_pass_failure() {
    let points = sample();
    let err = SkylineExecutor::new()
        .custom_filter_pass(Some(broken))
        .run(&points)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Collective);
    assert_eq!(
        err.to_string(),
        "collective reduce failed on rank 2: rank disconnected"
    );
}

// ============================================================================
// Adapter Tests
// ============================================================================

/// Test the result contents of the sequential adapter.
#[test]
fn test_sequential_adapter_result() {
    let points = sample();
    let result = SkylineBuilder::new()
        .adapter(Sequential)
        .build()
        .unwrap()
        .fit(&points)
        .unwrap();

    assert_eq!(result.dims, 2);
    assert_eq!(result.count, 3);
    assert_eq!(result.input_len, 4);
    assert_eq!(result.eliminated(), 1);
    assert_eq!(result.indices, vec![0, 1, 2]);
    assert!(result.contains(2));
    assert!(!result.contains(3));
    assert_eq!(result.workers_used, 1);
    assert_eq!(result.backend, Backend::Sequential);
}

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let err = SkylineBuilder::<f64>::new()
        .workers(2)
        .workers(3)
        .adapter(Sequential)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SkylineError::DuplicateParameter {
            parameter: "workers"
        }
    );
}

/// Test that zero workers fails at build time.
#[test]
fn test_builder_zero_workers() {
    let err = SkylineBuilder::<f64>::new()
        .workers(0)
        .adapter(Sequential)
        .build()
        .unwrap_err();
    assert_eq!(err, SkylineError::InvalidWorkerCount(0));
}

/// Test that the builder forwards the injected pass and backend.
#[test]
fn test_builder_forwards_dev_hooks() {
    let points = sample();
    let model = SkylineBuilder::new()
        .workers(3)
        .backend(Backend::Distributed)
        .custom_filter_pass(keep_all)
        .adapter(Sequential)
        .build()
        .unwrap();
    assert_eq!(model.workers(), 3);

    let result = model.fit(&points).unwrap();
    assert_eq!(result.count, 4);
    assert_eq!(result.workers_used, 3);
    assert_eq!(result.backend, Backend::Distributed);
}
