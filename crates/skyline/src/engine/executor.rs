//! Execution engine for skyline filtering.
//!
//! ## Purpose
//!
//! This module provides the executor that runs one filtering pass over a
//! point set. By default it runs the sequential kernel; extension crates
//! replace the pass with a parallel one through the [`FilterPassFn`] hook,
//! keeping a single entry point for every strategy.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and builder-based entry points.
//! * The hook receives the worker count; the sequential kernel ignores it.
//! * Requesting a non-sequential backend without an injected pass is an
//!   error rather than a silent fallback.
//!
//! ## Invariants
//!
//! * The returned survivor count equals the number of set membership flags.
//! * The membership vector has one flag per input point.
//!
//! ## Non-goals
//!
//! * This module does not spawn threads (handled by extension crates).
//! * This module does not extract surviving points (handled by adapters).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::filter::skyline;
use crate::engine::validator::Validator;
use crate::primitives::backend::Backend;
use crate::primitives::errors::SkylineError;
use crate::primitives::membership::MembershipVector;
use crate::primitives::points::PointSet;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom filter pass function
#[doc(hidden)]
pub type FilterPassFn<T> = fn(
    &PointSet<T>, // points
    usize,        // workers
) -> Result<(MembershipVector, usize), SkylineError>; // (membership, survivors)

/// Output from skyline execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput {
    /// Final membership flags, one per input point.
    pub membership: MembershipVector,

    /// Number of surviving points.
    pub survivors: usize,

    /// Backend that produced the result.
    pub backend: Backend,

    /// Number of workers the pass ran with.
    pub workers: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for skyline execution.
#[derive(Debug, Clone)]
pub struct SkylineConfig<T> {
    /// Number of workers for parallel passes (threads or ranks).
    pub workers: usize,

    /// Execution backend hint.
    pub backend: Backend,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom filter pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,
}

impl<T: Float> Default for SkylineConfig<T> {
    fn default() -> Self {
        Self {
            workers: 1,
            backend: Backend::default(),
            custom_filter_pass: None,
        }
    }
}

/// Unified executor for skyline filtering.
#[derive(Debug, Clone)]
pub struct SkylineExecutor<T: Float> {
    /// Number of workers for parallel passes.
    pub workers: usize,

    /// Execution backend hint.
    pub backend: Backend,

    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,
}

impl<T: Float> Default for SkylineExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SkylineExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new sequential executor.
    pub fn new() -> Self {
        Self {
            workers: 1,
            backend: Backend::Sequential,
            custom_filter_pass: None,
        }
    }

    /// Create an executor from a configuration payload.
    pub fn from_config(config: &SkylineConfig<T>) -> Self {
        Self::new()
            .workers(config.workers)
            .backend(config.backend)
            .custom_filter_pass(config.custom_filter_pass)
    }

    /// Set the worker count.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the backend hint.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set a custom filter pass.
    #[doc(hidden)]
    pub fn custom_filter_pass(mut self, pass: Option<FilterPassFn<T>>) -> Self {
        self.custom_filter_pass = pass;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Filter `points` using a `SkylineConfig` payload.
    pub fn run_with_config(
        points: &PointSet<T>,
        config: SkylineConfig<T>,
    ) -> Result<ExecutorOutput, SkylineError> {
        Self::from_config(&config).run(points)
    }

    /// Run one filtering pass over `points`.
    pub fn run(&self, points: &PointSet<T>) -> Result<ExecutorOutput, SkylineError> {
        Validator::validate_workers(self.workers)?;

        let (membership, survivors, workers) = match (self.backend, self.custom_filter_pass) {
            (_, Some(pass)) => {
                let (membership, survivors) = pass(points, self.workers)?;
                (membership, survivors, self.workers)
            }
            (Backend::Sequential, None) => {
                let (membership, survivors) = skyline(points)?;
                (membership, survivors, 1)
            }
            (backend, None) => {
                return Err(SkylineError::UnsupportedFeature {
                    adapter: "Sequential",
                    feature: backend.name(),
                });
            }
        };

        debug_assert_eq!(membership.len(), points.len());
        debug_assert_eq!(membership.count(), survivors);

        Ok(ExecutorOutput {
            membership,
            survivors,
            backend: self.backend,
            workers,
        })
    }
}
