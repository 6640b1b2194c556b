//! # Skyline: Pareto-frontier filtering for Rust
//!
//! Computes the **skyline** (Pareto frontier) of a set of N points in D
//! dimensions: the points that no other point dominates.
//!
//! ## What is a skyline?
//!
//! Point `p` dominates point `q` when `p` is at least as large as `q` in every
//! coordinate and strictly larger in at least one. The skyline keeps every
//! point that nothing dominates. Identical points never dominate each other,
//! so duplicates on the frontier are all kept.
//!
//! ## Quick Start
//!
//! ```rust
//! use skyline::prelude::*;
//!
//! let points = PointSet::from_rows(2, &[[3.0_f64, 1.0], [1.0, 3.0], [2.0, 2.0], [0.0, 0.0]])?;
//!
//! let model = Skyline::new().adapter(Sequential).build()?;
//! let result = model.fit(&points)?;
//!
//! assert_eq!(result.count, 3);
//! assert_eq!(result.indices, vec![0, 1, 2]);
//! print!("{}", result);
//! # Result::<(), SkylineError>::Ok(())
//! ```
//!
//! ```text
//! 2
//! 3
//! 3.000000 1.000000
//! 1.000000 3.000000
//! 2.000000 2.000000
//! ```
//!
//! ## Text format
//!
//! The [`format`] module reads the whitespace-separated input format
//! (dimension, point count, coordinates) and writes results in the same
//! format, so a skyline can be filtered again.
//!
//! ## Parallel execution
//!
//! This crate runs the sequential kernel. The `fastSkyline` crate injects
//! shared-memory and distributed filter passes into the same executor.
//!
//! ## `no_std` support
//!
//! Disable default features to build with `alloc` only. The `format`
//! writer and `read_points` require `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - the dominance relation.
mod math;

// Layer 3: Algorithms - filtering kernels.
mod algorithms;

// Layer 4: Evaluation - aggregation and verification of results.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for skyline computation.
mod api;

// Text input and output.
pub mod format;

// Standard skyline prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Sequential, ErrorKind, PointSet, SkylineBuilder as Skyline, SkylineError,
        SkylineResult, Violation, verify_skyline,
    };
    pub use crate::format::reader::parse_points;
    #[cfg(feature = "std")]
    pub use crate::format::reader::read_points;
    #[cfg(feature = "std")]
    pub use crate::format::writer::write_skyline;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
