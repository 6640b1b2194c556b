//! Error types for skyline operations.
//!
//! ## Purpose
//!
//! This module defines every error condition that can occur while loading a
//! point set, configuring an execution adapter, or running one of the
//! filtering strategies.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (token, index, expected vs. got).
//! * **Classified**: Every variant maps to one [`ErrorKind`] of the taxonomy.
//! * **Fatal**: No variant is recoverable; callers surface them and stop.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//!
//! ## Key concepts
//!
//! 1. **Format errors**: missing or malformed tokens, bad dimensionality, truncated data.
//! 2. **Allocation errors**: buffers or worker pools that cannot be obtained.
//! 3. **Collective failures**: broadcast, barrier or reduction that cannot complete.
//! 4. **Configuration errors**: invalid worker counts, duplicate builder parameters.
//! 5. **I/O errors**: the input or output stream failed.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of a [`SkylineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be turned into a valid point set.
    Format,

    /// A buffer or worker resource could not be obtained.
    Allocation,

    /// A collective operation of the distributed strategy did not complete.
    Collective,

    /// The requested configuration is invalid.
    Configuration,

    /// Reading input or writing output failed.
    Io,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for skyline operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SkylineError {
    /// A required token is absent from the input stream.
    MissingToken {
        /// Description of the expected field (e.g., "dimension").
        field: String,
    },

    /// A token is present but cannot be parsed as the expected number.
    MalformedToken {
        /// Description of the expected field.
        field: String,
        /// The token as it appeared in the input.
        token: String,
    },

    /// Points need at least two coordinates.
    InvalidDimension(i64),

    /// The declared number of points is negative.
    InvalidPointCount(i64),

    /// A flat coordinate buffer does not hold a whole number of points.
    ShapeMismatch {
        /// Number of coordinates provided.
        len: usize,
        /// Declared dimensionality.
        dims: usize,
    },

    /// A row has a different number of coordinates than the first one.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Expected number of coordinates.
        expected: usize,
        /// Number of coordinates found.
        got: usize,
    },

    /// A coordinate is NaN; dominance is undefined for it.
    InvalidNumericValue {
        /// Index of the point.
        point: usize,
        /// Index of the coordinate within the point.
        coordinate: usize,
    },

    /// A buffer of the given number of elements could not be allocated.
    AllocationFailed {
        /// What was being allocated (e.g., "point buffer").
        what: &'static str,
        /// Number of elements requested.
        elements: usize,
    },

    /// The worker pool could not be created.
    WorkerPool(String),

    /// A collective operation could not complete.
    CollectiveFailure {
        /// Name of the collective ("broadcast", "barrier", "reduce").
        operation: &'static str,
        /// Rank that observed the failure.
        rank: usize,
        /// Human-readable reason.
        reason: String,
    },

    /// Worker count must be at least 1.
    InvalidWorkerCount(usize),

    /// Membership vectors of different lengths cannot be merged.
    MembershipLengthMismatch {
        /// Length of the accumulating vector.
        expected: usize,
        /// Length of the incoming vector.
        got: usize,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter.
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// An I/O operation on the input or output stream failed.
    Io(String),
}

impl SkylineError {
    /// Classify this error into the taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingToken { .. }
            | Self::MalformedToken { .. }
            | Self::InvalidDimension(_)
            | Self::InvalidPointCount(_)
            | Self::ShapeMismatch { .. }
            | Self::RaggedRow { .. }
            | Self::InvalidNumericValue { .. } => ErrorKind::Format,
            Self::AllocationFailed { .. } | Self::WorkerPool(_) => ErrorKind::Allocation,
            Self::CollectiveFailure { .. } | Self::MembershipLengthMismatch { .. } => {
                ErrorKind::Collective
            }
            Self::InvalidWorkerCount(_)
            | Self::UnsupportedFeature { .. }
            | Self::DuplicateParameter { .. } => ErrorKind::Configuration,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Shorthand for a collective failure observed by `rank`.
    pub fn collective(operation: &'static str, rank: usize, reason: impl Into<String>) -> Self {
        Self::CollectiveFailure {
            operation,
            rank,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SkylineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingToken { field } => write!(f, "cannot read the {field}"),
            Self::MalformedToken { field, token } => {
                write!(f, "cannot parse the {field} from '{token}'")
            }
            Self::InvalidDimension(d) => {
                write!(f, "Invalid dimension: {d} (must be at least 2)")
            }
            Self::InvalidPointCount(n) => {
                write!(f, "Invalid number of points: {n} (must be >= 0)")
            }
            Self::ShapeMismatch { len, dims } => {
                write!(
                    f,
                    "Shape mismatch: {len} coordinates is not a multiple of dimension {dims}"
                )
            }
            Self::RaggedRow { row, expected, got } => {
                write!(
                    f,
                    "Ragged input: point {row} has {got} coordinates, expected {expected}"
                )
            }
            Self::InvalidNumericValue { point, coordinate } => {
                write!(f, "Invalid numeric value: coordinate {coordinate} of point {point} is NaN")
            }
            Self::AllocationFailed { what, elements } => {
                write!(f, "cannot allocate {what} of {elements} elements")
            }
            Self::WorkerPool(msg) => write!(f, "cannot create worker pool: {msg}"),
            Self::CollectiveFailure {
                operation,
                rank,
                reason,
            } => {
                write!(f, "collective {operation} failed on rank {rank}: {reason}")
            }
            Self::InvalidWorkerCount(w) => {
                write!(f, "Invalid worker count: {w} (must be at least 1)")
            }
            Self::MembershipLengthMismatch { expected, got } => {
                write!(
                    f,
                    "Membership length mismatch: expected {expected} entries, got {got}"
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SkylineError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for SkylineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
