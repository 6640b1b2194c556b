//! Sequential in-memory skyline adapter.
//!
//! ## Purpose
//!
//! This module provides the builder and processor for computing the skyline
//! of a complete in-memory [`PointSet`]. It runs the sequential kernel by
//! default and any injected filter pass otherwise, then extracts the
//! surviving points in input order.
//!
//! ## Design notes
//!
//! * **Deferred validation**: Duplicate parameters recorded by the generic
//!   builder are reported by [`SequentialSkylineBuilder::build`].
//! * **Reusable**: A built processor can filter any number of point sets.
//!
//! ## Invariants
//!
//! * The result's survivor count equals the number of set membership flags.
//! * Survivors keep the original input order.
//!
//! ## Non-goals
//!
//! * This adapter does not spawn threads itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FilterPassFn, SkylineConfig, SkylineExecutor};
use crate::engine::output::SkylineResult;
use crate::engine::validator::Validator;
use crate::evaluation::aggregate::ResultAggregator;
use crate::primitives::backend::Backend;
use crate::primitives::errors::SkylineError;
use crate::primitives::points::PointSet;

// ============================================================================
// Sequential Skyline Builder
// ============================================================================

/// Builder for the sequential skyline processor.
#[derive(Debug, Clone)]
pub struct SequentialSkylineBuilder<T: Float> {
    /// Number of workers handed to an injected filter pass.
    pub workers: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,

    /// Execution backend hint.
    #[doc(hidden)]
    pub backend: Option<Backend>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SequentialSkylineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SequentialSkylineBuilder<T> {
    /// Create a new sequential builder with default parameters.
    fn new() -> Self {
        Self {
            workers: 1,
            custom_filter_pass: None,
            backend: None,
            duplicate_param: None,
        }
    }

    /// Set the number of workers passed to an injected filter pass.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set the execution backend hint.
    #[doc(hidden)]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set a custom filter pass function.
    #[doc(hidden)]
    pub fn custom_filter_pass(mut self, pass: FilterPassFn<T>) -> Self {
        self.custom_filter_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sequential processor.
    pub fn build(self) -> Result<SequentialSkyline<T>, SkylineError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate worker count
        Validator::validate_workers(self.workers)?;

        Ok(SequentialSkyline { config: self })
    }
}

// ============================================================================
// Sequential Skyline Processor
// ============================================================================

/// Sequential skyline processor.
#[derive(Debug, Clone)]
pub struct SequentialSkyline<T: Float> {
    config: SequentialSkylineBuilder<T>,
}

impl<T: Float> SequentialSkyline<T> {
    /// Number of workers this processor hands to its filter pass.
    pub fn workers(&self) -> usize {
        self.config.workers
    }

    /// Compute the skyline of `points`.
    pub fn fit(&self, points: &PointSet<T>) -> Result<SkylineResult<T>, SkylineError> {
        let config = SkylineConfig {
            workers: self.config.workers,
            backend: self.config.backend.unwrap_or_default(),
            // ++++++++++++++++++++++++++++++++++++++
            // +               DEV                  +
            // ++++++++++++++++++++++++++++++++++++++
            custom_filter_pass: self.config.custom_filter_pass,
        };

        let output = SkylineExecutor::run_with_config(points, config)?;
        let survivors = ResultAggregator::survivors(points, &output.membership)?;

        Ok(SkylineResult::from_survivors(
            survivors,
            output.membership,
            output.backend,
            output.workers,
        ))
    }
}
