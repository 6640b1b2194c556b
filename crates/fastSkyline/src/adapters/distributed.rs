//! Distributed adapter for skyline computation.
//!
//! ## Purpose
//!
//! This module provides the execution adapter that splits the candidate
//! domain across message-passing ranks, each scanning its block against
//! the full point set, and reduces the local results at the root.
//!
//! ## Design notes
//!
//! * **Delegation**: Wraps the `skyline` sequential builder and injects the
//!   distributed pass; validation and result assembly stay in `skyline`.
//! * **Self-contained**: Needs no optional feature; ranks are scoped threads.
//!
//! ## Invariants
//!
//! * The surviving set equals the sequential result for every rank count.
//! * Output order matches input order.

// External dependencies
use log::info;
use num_traits::Float;
use std::time::Instant;

// Export dependencies from skyline crate
use skyline::internals::adapters::sequential::SequentialSkylineBuilder;
use skyline::internals::engine::output::SkylineResult;
use skyline::internals::primitives::backend::Backend;
use skyline::internals::primitives::errors::SkylineError;

// Internal dependencies
use crate::engine::distributed::filter_pass_distributed;
use crate::input::SkylineInput;

// ============================================================================
// Distributed Skyline Builder
// ============================================================================

/// Builder for the distributed skyline processor.
#[derive(Debug, Clone)]
pub struct DistributedSkylineBuilder<T: Float> {
    /// Base builder from the skyline crate
    pub base: SequentialSkylineBuilder<T>,
}

impl<T: Float> Default for DistributedSkylineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DistributedSkylineBuilder<T> {
    /// Create a new distributed builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * workers (ranks): number of available CPUs
    fn new() -> Self {
        let base = SequentialSkylineBuilder::default()
            .workers(crate::api::default_workers())
            .backend(Backend::Distributed);
        Self { base }
    }

    /// Set the number of ranks.
    pub fn workers(mut self, workers: usize) -> Self {
        self.base = self.base.workers(workers);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the distributed processor.
    pub fn build(self) -> Result<DistributedSkyline<T>, SkylineError> {
        let _ = self.base.clone().build()?;

        Ok(DistributedSkyline { config: self })
    }
}

// ============================================================================
// Distributed Skyline Processor
// ============================================================================

/// Distributed skyline processor.
#[derive(Debug, Clone)]
pub struct DistributedSkyline<T: Float> {
    config: DistributedSkylineBuilder<T>,
}

impl<T: Float + Send> DistributedSkyline<T> {
    /// Number of ranks.
    pub fn workers(&self) -> usize {
        self.config.base.workers
    }

    /// Compute the skyline of `input`.
    pub fn fit<I>(&self, input: &I) -> Result<SkylineResult<T>, SkylineError>
    where
        I: SkylineInput<T> + ?Sized,
    {
        let points = input.as_point_set()?;

        let builder = self
            .config
            .base
            .clone()
            .backend(Backend::Distributed)
            .custom_filter_pass(filter_pass_distributed);

        let started = Instant::now();
        let result = builder.build()?.fit(&points)?;
        info!(
            "distributed skyline: {} of {} points in {:.3?} across {} ranks",
            result.count,
            result.input_len,
            started.elapsed(),
            result.workers_used
        );
        Ok(result)
    }
}
