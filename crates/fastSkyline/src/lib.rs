//! # fastSkyline: parallel skyline computation for Rust
//!
//! Parallel execution strategies for the [`skyline`] crate. Both strategies
//! produce exactly the surviving set of the sequential kernel.
//!
//! ## Strategies
//!
//! * **SharedMemory**: the outer loop over candidates stays sequential; for
//!   every surviving candidate the scan over all points is split into
//!   contiguous blocks and run on a dedicated `rayon` pool of W threads.
//! * **Distributed**: the candidate range is split into P blocks, one per
//!   rank. Ranks run on their own threads and communicate only by message
//!   passing: the root broadcasts the points, every rank scans its block
//!   against all points, and the root combines the local results with a
//!   logical-AND reduction.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastSkyline::prelude::*;
//!
//! let rows = vec![[3.0, 1.0], [1.0, 3.0], [2.0, 2.0], [0.0, 0.0]];
//!
//! let shared = Skyline::new().workers(2).adapter(SharedMemory).build()?;
//! let distributed = Skyline::new().workers(3).adapter(Distributed).build()?;
//!
//! let a = shared.fit(&rows)?;
//! let b = distributed.fit(&rows)?;
//!
//! assert_eq!(a.indices, vec![0, 1, 2]);
//! assert_eq!(a.indices, b.indices);
//! # Result::<(), SkylineError>::Ok(())
//! ```
//!
//! ## Inputs
//!
//! `fit` accepts a [`PointSet`](prelude::PointSet), `Vec<[T; D]>`,
//! `Vec<Vec<T>>`, and two-dimensional `ndarray` arrays (rows are points).
//!
//! ## Features
//!
//! * `cpu` (default): the shared-memory strategy on `rayon`.
//! * `dev`: exposes `internals` for tests and benchmarks.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel filter passes.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for skyline computation.
mod api;

// Input data handling.
mod input;

// Standard fastSkyline prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Distributed, Sequential, SharedMemory},
        Backend, ErrorKind, PointSet, SkylineBuilder as Skyline, SkylineError, SkylineInput,
        SkylineResult, Violation, default_workers, verify_skyline,
    };
    pub use skyline::prelude::{parse_points, read_points, write_skyline};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
