//! High-level API for skyline computation with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point with parallel execution
//! capabilities. It extends the `skyline` API with adapters for the
//! shared-memory and distributed strategies.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `skyline` builder pattern.
//! * **Transparent**: Marker types (Sequential, SharedMemory, Distributed) select the builders.
//! * **Parallel defaults**: Parallel adapters default to one worker per available CPU.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SkylineBuilder`] via `Skyline::new()`.
//! 2. Optionally set `.workers(w)`.
//! 3. Select an adapter via `.adapter(SharedMemory)` to get an execution builder.

// External dependencies
use num_traits::Float;
use std::num::NonZeroUsize;
use std::thread;

// Internal dependencies
use crate::adapters::distributed::DistributedSkylineBuilder;
use crate::adapters::shared::SharedMemorySkylineBuilder;

// Import base marker types for delegation
use skyline::internals::api::Sequential as BaseSequential;

// Publicly re-exported types
pub use crate::input::SkylineInput;
pub use skyline::internals::api::{
    ErrorKind, PointSet, Sequential, SkylineAdapter, SkylineBuilder, SkylineError, SkylineResult,
    Violation, verify_skyline,
};
pub use skyline::internals::primitives::backend::Backend;

/// Number of workers used when none is configured: the available parallelism, or 1.
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Distributed, Sequential, SharedMemory};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for shared-memory processing on a thread pool.
#[derive(Debug, Clone, Copy)]
pub struct SharedMemory;

impl<T: Float> SkylineAdapter<T> for SharedMemory {
    type Output = SharedMemorySkylineBuilder<T>;

    fn convert(builder: SkylineBuilder<T>) -> Self::Output {
        let workers = builder.workers.unwrap_or_else(default_workers);

        // Delegate to base implementation to create base builder
        let base = <BaseSequential as SkylineAdapter<T>>::convert(builder)
            .workers(workers)
            .backend(Backend::SharedMemory);

        SharedMemorySkylineBuilder { base }
    }
}

/// Marker for distributed processing over message-passing ranks.
#[derive(Debug, Clone, Copy)]
pub struct Distributed;

impl<T: Float> SkylineAdapter<T> for Distributed {
    type Output = DistributedSkylineBuilder<T>;

    fn convert(builder: SkylineBuilder<T>) -> Self::Output {
        let workers = builder.workers.unwrap_or_else(default_workers);

        // Delegate to base implementation to create base builder
        let base = <BaseSequential as SkylineAdapter<T>>::convert(builder)
            .workers(workers)
            .backend(Backend::Distributed);

        DistributedSkylineBuilder { base }
    }
}
