//! Shared-memory filter pass for skyline computation.
//!
//! ## Purpose
//!
//! This module provides the shared-memory filter pass that is injected into
//! the `skyline` crate's execution engine. The outer loop over candidates
//! runs on the calling thread; for each surviving candidate the inner scan
//! is fanned out across a dedicated pool of W worker threads.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential kernel via the `FilterPassFn` hook.
//! * **Parallelism**: A `rayon` pool of exactly W threads, built once per pass.
//! * **Ownership**: The membership vector is split into disjoint `&mut` blocks
//!   along the partition descriptors, so each worker writes only its own indices.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Fan-out**: One task per block, each running the sequential inner scan.
//! * **Fan-in**: `ThreadPool::install` returns only after every block is
//!   done; the per-block elimination counts are summed into the survivor count.
//!
//! ## Invariants
//!
//! * Candidates are visited in input order and skipped once eliminated.
//! * The resulting membership equals the sequential kernel's.
//!
//! ## Non-goals
//!
//! * This module does not parallelize the outer candidate loop.
//! * This module does not validate input data (handled by `PointSet`).

// External dependencies
use log::debug;
use num_traits::Float;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

// Export dependencies from skyline crate
use skyline::internals::algorithms::filter::eliminate_dominated_by;
use skyline::internals::engine::validator::Validator;
use skyline::internals::primitives::errors::SkylineError;
use skyline::internals::primitives::membership::MembershipVector;
use skyline::internals::primitives::partition::Partition;
use skyline::internals::primitives::points::PointSet;

// ============================================================================
// Shared-Memory Filter Pass
// ============================================================================

/// Compute the skyline with the inner scan fanned out over `workers` threads.
///
/// Returns the membership vector and the number of surviving points.
pub fn filter_pass_shared<T>(
    points: &PointSet<T>,
    workers: usize,
) -> Result<(MembershipVector, usize), SkylineError>
where
    T: Float + Send + Sync,
{
    Validator::validate_workers(workers)?;

    let n = points.len();
    let mut membership = MembershipVector::all(n)?;
    let parts = Partition::blocks(n, workers)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("skyline-worker-{i}"))
        .build()
        .map_err(|e| SkylineError::WorkerPool(e.to_string()))?;

    debug!(
        "shared-memory pass: {n} points x {} dims, {workers} workers, blocks {:?}",
        points.dims(),
        parts
    );

    let mut survivors = n;
    for i in 0..n {
        if !membership.is_member(i) {
            continue;
        }

        let mut blocks = membership.blocks_mut(&parts);
        let eliminated: usize = pool.install(|| {
            blocks
                .par_iter_mut()
                .map(|block| eliminate_dominated_by(points, i, block))
                .sum()
        });
        survivors -= eliminated;
    }

    debug!("shared-memory pass: {survivors} of {n} points survive");

    Ok((membership, survivors))
}
