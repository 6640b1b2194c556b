//! Input validation for skyline configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for the values that reach
//! the engine from outside: dimensionality and point counts as read from a
//! header, and worker counts and duplicate builder parameters from the
//! configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Signed inputs**: Header values are validated as signed integers so a
//!   negative count is reported as such instead of wrapping.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check point coordinates (enforced by `PointSet`).
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SkylineError;
use crate::primitives::points::MIN_DIMS;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for skyline configuration and input headers.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Header Validation
    // ========================================================================

    /// Validate the declared dimensionality and convert it to `usize`.
    pub fn validate_dimension(dims: i64) -> Result<usize, SkylineError> {
        match usize::try_from(dims) {
            Ok(d) if d >= MIN_DIMS => Ok(d),
            _ => Err(SkylineError::InvalidDimension(dims)),
        }
    }

    /// Validate the declared number of points and convert it to `usize`.
    pub fn validate_point_count(n: i64) -> Result<usize, SkylineError> {
        usize::try_from(n).map_err(|_| SkylineError::InvalidPointCount(n))
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of workers (threads or ranks).
    pub fn validate_workers(workers: usize) -> Result<(), SkylineError> {
        if workers == 0 {
            return Err(SkylineError::InvalidWorkerCount(workers));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SkylineError> {
        if let Some(param) = duplicate_param {
            return Err(SkylineError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
