//! High-level API for skyline computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for the execution parameters and the transition to an
//! execution adapter through marker types.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default; `Skyline::new()` alone is valid.
//! * **Polymorphic**: Marker types select the adapter builder.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SkylineBuilder`] via `Skyline::new()`.
//! 2. Chain configuration methods (`.workers()`).
//! 3. Select an adapter via `.adapter(Adapter::Sequential)` to get an execution builder.
//! 4. Call `.build()?` and then `.fit(&points)?`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::sequential::SequentialSkylineBuilder;
use crate::engine::executor::FilterPassFn;
use crate::primitives::backend::Backend;

// Publicly re-exported types
pub use crate::engine::output::SkylineResult;
pub use crate::evaluation::verify::{Violation, verify_skyline};
pub use crate::primitives::errors::{ErrorKind, SkylineError};
pub use crate::primitives::points::PointSet;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Sequential;
}

/// Fluent builder for configuring skyline execution.
#[derive(Debug, Clone)]
pub struct SkylineBuilder<T> {
    /// Number of workers (threads or ranks) for parallel adapters.
    pub workers: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,

    /// Execution backend hint.
    #[doc(hidden)]
    pub backend: Option<Backend>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SkylineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SkylineBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SkylineAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            workers: None,
            custom_filter_pass: None,
            backend: None,
            duplicate_param: None,
        }
    }

    /// Set the number of workers.
    pub fn workers(mut self, workers: usize) -> Self {
        if self.workers.is_some() {
            self.duplicate_param = Some("workers");
        }
        self.workers = Some(workers);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom filter pass function.
    #[doc(hidden)]
    pub fn custom_filter_pass(mut self, pass: FilterPassFn<T>) -> Self {
        self.custom_filter_pass = Some(pass);
        self
    }

    /// Set the execution backend hint.
    #[doc(hidden)]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SkylineAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SkylineBuilder`] into a specialized execution builder.
    fn convert(builder: SkylineBuilder<T>) -> Self::Output;
}

/// Marker for sequential in-memory processing.
#[derive(Debug, Clone, Copy)]
pub struct Sequential;

impl<T: Float> SkylineAdapter<T> for Sequential {
    type Output = SequentialSkylineBuilder<T>;

    fn convert(builder: SkylineBuilder<T>) -> Self::Output {
        let mut result = SequentialSkylineBuilder::default();

        if let Some(workers) = builder.workers {
            result.workers = workers;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_filter_pass {
            result.custom_filter_pass = Some(pass);
        }
        if let Some(b) = builder.backend {
            result.backend = Some(b);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
