//! Shared-memory adapter for skyline computation.
//!
//! ## Purpose
//!
//! This module provides the execution adapter that computes the skyline
//! with the inner scan of every candidate fanned out across a pool of
//! worker threads.
//!
//! ## Design notes
//!
//! * **Delegation**: Wraps the `skyline` sequential builder and injects the
//!   shared-memory pass; validation and result assembly stay in `skyline`.
//! * **Feature-gated**: Requires the `cpu` feature (`rayon`).
//!
//! ## Invariants
//!
//! * The surviving set equals the sequential result for every worker count.
//! * Output order matches input order.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::filter_pass_shared;
#[cfg(feature = "cpu")]
use log::info;
#[cfg(feature = "cpu")]
use skyline::internals::primitives::points::PointSet;
#[cfg(feature = "cpu")]
use std::time::Instant;

// External dependencies
use num_traits::Float;

// Export dependencies from skyline crate
use skyline::internals::adapters::sequential::SequentialSkylineBuilder;
use skyline::internals::engine::output::SkylineResult;
use skyline::internals::primitives::backend::Backend;
use skyline::internals::primitives::errors::SkylineError;

// Internal dependencies
use crate::input::SkylineInput;

// ============================================================================
// Shared-Memory Skyline Builder
// ============================================================================

/// Builder for the shared-memory skyline processor.
#[derive(Debug, Clone)]
pub struct SharedMemorySkylineBuilder<T: Float> {
    /// Base builder from the skyline crate
    pub base: SequentialSkylineBuilder<T>,
}

impl<T: Float> Default for SharedMemorySkylineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SharedMemorySkylineBuilder<T> {
    /// Create a new shared-memory builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * workers: number of available CPUs
    fn new() -> Self {
        let base = SequentialSkylineBuilder::default()
            .workers(crate::api::default_workers())
            .backend(Backend::SharedMemory);
        Self { base }
    }

    /// Set the number of worker threads.
    pub fn workers(mut self, workers: usize) -> Self {
        self.base = self.base.workers(workers);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the shared-memory processor.
    pub fn build(self) -> Result<SharedMemorySkyline<T>, SkylineError> {
        // Validate by attempting to build the base processor
        let _ = self.base.clone().build()?;

        Ok(SharedMemorySkyline { config: self })
    }
}

// ============================================================================
// Shared-Memory Skyline Processor
// ============================================================================

/// Shared-memory skyline processor.
#[derive(Debug, Clone)]
pub struct SharedMemorySkyline<T: Float> {
    config: SharedMemorySkylineBuilder<T>,
}

impl<T: Float + Send + Sync> SharedMemorySkyline<T> {
    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.config.base.workers
    }

    /// Compute the skyline of `input`.
    pub fn fit<I>(&self, input: &I) -> Result<SkylineResult<T>, SkylineError>
    where
        I: SkylineInput<T> + ?Sized,
    {
        let points = input.as_point_set()?;

        #[cfg(feature = "cpu")]
        {
            self.fit_shared(&points)
        }
        #[cfg(not(feature = "cpu"))]
        {
            drop(points);
            Err(SkylineError::UnsupportedFeature {
                adapter: "SharedMemory",
                feature: "shared-memory backend (requires 'cpu' feature)",
            })
        }
    }

    #[cfg(feature = "cpu")]
    fn fit_shared(&self, points: &PointSet<T>) -> Result<SkylineResult<T>, SkylineError> {
        // Inject the shared-memory pass into the base builder
        let builder = self
            .config
            .base
            .clone()
            .backend(Backend::SharedMemory)
            .custom_filter_pass(filter_pass_shared);

        let started = Instant::now();
        let result = builder.build()?.fit(points)?;
        info!(
            "shared-memory skyline: {} of {} points in {:.3?} with {} threads",
            result.count,
            result.input_len,
            started.elapsed(),
            result.workers_used
        );
        Ok(result)
    }
}
