//! Parsing of the text input format.
//!
//! ## Purpose
//!
//! This module turns the text input format into a [`PointSet`]. The input
//! is a token stream: the dimension D is the first token, the remainder of
//! its line is ignored, then the point count N and N × D coordinates follow,
//! separated by any whitespace.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: The first missing or malformed token aborts parsing.
//! * **Early allocation**: The point buffer is reserved from the header, so
//!   an impossible N fails before coordinates are read.
//! * **Generics**: Coordinates parse into any `Float + FromStr` type.
//!
//! ## Invariants
//!
//! * A successfully parsed set has exactly N points of D coordinates.
//! * Tokens after the last coordinate are ignored.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString};

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::buffer::{coordinate_count, try_with_capacity};
use crate::primitives::errors::SkylineError;
use crate::primitives::points::PointSet;

// ============================================================================
// Token Helpers
// ============================================================================

fn missing(field: &str) -> SkylineError {
    SkylineError::MissingToken {
        field: String::from(field),
    }
}

fn malformed(field: &str, token: &str) -> SkylineError {
    SkylineError::MalformedToken {
        field: String::from(field),
        token: token.to_string(),
    }
}

fn parse_header(token: Option<&str>, field: &str) -> Result<i64, SkylineError> {
    let token = token.ok_or_else(|| missing(field))?;
    token.parse::<i64>().map_err(|_| malformed(field, token))
}

// ============================================================================
// Parser
// ============================================================================

/// Parse a point set from the text input format.
pub fn parse_points<T>(input: &str) -> Result<PointSet<T>, SkylineError>
where
    T: Float + FromStr,
{
    // Line 1: the dimension, then anything up to the end of the line.
    let input = input.trim_start();
    let (first_token, after_first) = match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], &input[pos..]),
        None => (input, ""),
    };
    let first_token = (!first_token.is_empty()).then_some(first_token);
    let dims = Validator::validate_dimension(parse_header(first_token, "dimension")?)?;

    let body = match after_first.find('\n') {
        Some(pos) => &after_first[pos + 1..],
        None => return Err(missing("first line")),
    };

    // Line 2 onwards: a free-form token stream.
    let mut tokens = body.split_whitespace();
    let n = Validator::validate_point_count(parse_header(tokens.next(), "number of points")?)?;

    let total = coordinate_count(n, dims)?;
    let mut coords = try_with_capacity(total, "point buffer")?;

    for i in 0..n {
        for k in 0..dims {
            let token = tokens
                .next()
                .ok_or_else(|| missing(&format!("coordinate {k} of point {i}")))?;
            let value = token
                .parse::<T>()
                .map_err(|_| malformed(&format!("coordinate {k} of point {i}"), token))?;
            coords.push(value);
        }
    }

    PointSet::from_flat(dims, coords)
}

/// Read all of `reader` and parse it as a point set.
#[cfg(feature = "std")]
pub fn read_points<T, R>(mut reader: R) -> Result<PointSet<T>, SkylineError>
where
    T: Float + FromStr,
    R: std::io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_points(&text)
}
