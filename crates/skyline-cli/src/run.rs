//! The read, filter and write flow shared by the filter executables.
//!
//! # Responsibility
//! - Parse a point set from any reader, filter it with the selected
//!   strategy and write the result to any writer.
//! - Map every failure to a `FATAL:` line on stderr and a failing exit code.
//!
//! Coordinates are read as `f32`.

use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Instant;

use fastSkyline::prelude::*;
use log::{error, info};

/// Filtering strategy selected by an executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded kernel.
    Sequential,

    /// Inner scan fanned out over `threads` worker threads.
    SharedMemory {
        /// Size of the worker pool.
        threads: usize,
    },

    /// Candidate domain split over `ranks` message-passing ranks.
    Distributed {
        /// Number of ranks, root included.
        ranks: usize,
    },
}

impl Strategy {
    /// Compute the skyline of `points` with this strategy.
    pub fn fit(self, points: &PointSet<f32>) -> Result<SkylineResult<f32>, SkylineError> {
        match self {
            Self::Sequential => Skyline::new().adapter(Sequential).build()?.fit(points),
            Self::SharedMemory { threads } => Skyline::new()
                .workers(threads)
                .adapter(SharedMemory)
                .build()?
                .fit(points),
            Self::Distributed { ranks } => Skyline::new()
                .workers(ranks)
                .adapter(Distributed)
                .build()?
                .fit(points),
        }
    }
}

/// Read points from `input`, filter them and write the skyline to `output`.
pub fn filter_stream<R, W>(
    strategy: Strategy,
    input: R,
    output: W,
) -> Result<SkylineResult<f32>, SkylineError>
where
    R: Read,
    W: Write,
{
    let points: PointSet<f32> = read_points(input)?;
    info!(
        "read {} points of dimension {}",
        points.len(),
        points.dims()
    );

    let started = Instant::now();
    let result = strategy.fit(&points)?;
    info!(
        "{:?}: {} of {} points survive ({:.3?})",
        strategy,
        result.count,
        result.input_len,
        started.elapsed()
    );

    write_skyline(&result, output)?;
    Ok(result)
}

/// Run `strategy` over stdin and stdout, reporting failures on stderr.
pub fn run(strategy: Strategy) -> ExitCode {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match filter_stream(strategy, stdin, stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?} failed: {:?}", strategy, e.kind());
            eprintln!("FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}
