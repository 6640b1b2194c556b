//! Tests for the command-line building blocks.
//!
//! ## Test Organization
//!
//! 1. **Generator** - Worst-case datasets
//! 2. **Filter Flow** - Reading, filtering and writing through in-memory streams
//! 3. **Timer** - External command timing

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fastSkyline::prelude::*;
use skyline_cli::generate::{BUDGET, worst_case_point, write_worst_case};
use skyline_cli::run::{Strategy, filter_stream};

const STRATEGIES: [Strategy; 5] = [
    Strategy::Sequential,
    Strategy::SharedMemory { threads: 1 },
    Strategy::SharedMemory { threads: 4 },
    Strategy::Distributed { ranks: 1 },
    Strategy::Distributed { ranks: 3 },
];

// ============================================================================
// Generator Tests
// ============================================================================

/// Test that coordinates are non-negative and sum to the budget.
#[test]
fn test_worst_case_point_budget() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut point = Vec::new();

    for dims in 2..8 {
        worst_case_point(&mut rng, dims, &mut point);
        assert_eq!(point.len(), dims);
        assert!(point.iter().all(|&v| v >= 0.0));
        assert_relative_eq!(point.iter().sum::<f32>(), BUDGET, max_relative = 1e-4);
    }
}

/// Test the header and shape of the generated text.
#[test]
fn test_generator_output_shape() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut out = Vec::new();
    write_worst_case(&mut rng, 4, 3, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "3");
    assert_eq!(lines[1], "4");
    assert!(lines[2..].iter().all(|l| l.split(' ').count() == 3));
}

/// Test that every generated point survives under every strategy.
#[test]
fn test_generator_every_point_survives() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut data = Vec::new();
    write_worst_case(&mut rng, 200, 3, &mut data).unwrap();

    for strategy in STRATEGIES {
        let mut out = Vec::new();
        let result = filter_stream(strategy, data.as_slice(), &mut out).unwrap();
        assert_eq!(result.count, 200, "{strategy:?}");
    }
}

/// Test that a seed makes the output reproducible.
#[test]
fn test_generator_seeded() {
    let mut a = Vec::new();
    let mut b = Vec::new();
    write_worst_case(&mut StdRng::seed_from_u64(9), 10, 2, &mut a).unwrap();
    write_worst_case(&mut StdRng::seed_from_u64(9), 10, 2, &mut b).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Filter Flow Tests
// ============================================================================

/// Test the reference example through every strategy.
#[test]
fn test_filter_stream_reference_example() {
    let input = "2 reference\n4\n3 1\n1 3\n2 2\n0 0\n";
    let expected = "2\n3\n3.000000 1.000000\n1.000000 3.000000\n2.000000 2.000000\n";

    for strategy in STRATEGIES {
        let mut out = Vec::new();
        filter_stream(strategy, input.as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected, "{strategy:?}");
    }
}

/// Test that an empty dataset produces only the header.
#[test]
fn test_filter_stream_empty() {
    for strategy in STRATEGIES {
        let mut out = Vec::new();
        let result = filter_stream(strategy, "4\n0\n".as_bytes(), &mut out).unwrap();
        assert_eq!(result.count, 0);
        assert_eq!(out, b"4\n0\n");
    }
}

/// Test that format errors stop the flow before any output.
#[test]
fn test_filter_stream_format_error() {
    let mut out = Vec::new();
    let err = filter_stream(Strategy::Sequential, "1\n2\n0\n1\n".as_bytes(), &mut out)
        .unwrap_err();
    assert_eq!(err, SkylineError::InvalidDimension(1));
    assert!(out.is_empty());

    let err = filter_stream(
        Strategy::SharedMemory { threads: 2 },
        "2\n3\n1 2\n".as_bytes(),
        &mut out,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(out.is_empty());
}

/// Test that zero workers is a configuration error.
#[test]
fn test_filter_stream_zero_workers() {
    let mut out = Vec::new();
    let err = filter_stream(
        Strategy::Distributed { ranks: 0 },
        "2\n1\n1 1\n".as_bytes(),
        &mut out,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

// ============================================================================
// Timer Tests
// ============================================================================

#[cfg(unix)]
mod timer {
    use std::ffi::OsString;

    use skyline_cli::timing::{TimerError, time_command};

    /// Test that a successful command is timed.
    #[test]
    fn test_time_successful_command() {
        let elapsed = time_command(&OsString::from("true"), &[]).unwrap();
        assert!(elapsed.as_secs() < 60);
    }

    /// Test that a failing command is reported.
    #[test]
    fn test_time_failing_command() {
        let err = time_command(&OsString::from("false"), &[]).unwrap_err();
        assert!(matches!(err, TimerError::Failed(_)));
    }

    /// Test that a missing executable is reported.
    #[test]
    fn test_time_missing_command() {
        let err = time_command(&OsString::from("/nonexistent/skyline-binary"), &[]).unwrap_err();
        assert!(matches!(err, TimerError::Launch(_)));
    }

    /// Test that arguments are passed through.
    #[test]
    fn test_time_passes_arguments() {
        let args = [OsString::from("-c"), OsString::from("exit 3")];
        let err = time_command(&OsString::from("sh"), &args).unwrap_err();
        match err {
            TimerError::Failed(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
