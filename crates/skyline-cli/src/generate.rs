//! Worst-case input generation.
//!
//! Every generated point has coordinates summing to [`BUDGET`]. Two distinct
//! points with the same sum cannot dominate each other, so the skyline of
//! the dataset is the whole dataset.

use std::io::{self, BufWriter, Write};

use rand::Rng;

/// Sum of the coordinates of every generated point.
pub const BUDGET: f32 = 1000.0;

/// Default number of points.
pub const DEFAULT_POINTS: usize = 1000;

/// Default dimensionality.
pub const DEFAULT_DIMS: usize = 2;

/// Draw one point: `dims - 1` coordinates uniform in the remaining budget, the last takes the rest.
pub fn worst_case_point<R: Rng>(rng: &mut R, dims: usize, point: &mut Vec<f32>) {
    point.clear();
    let mut remaining = BUDGET;
    for _ in 1..dims {
        let value = rng.random_range(0.0..=remaining);
        point.push(value);
        remaining -= value;
    }
    point.push(remaining);
}

/// Write a worst-case dataset of `n` points in `dims` dimensions.
pub fn write_worst_case<R, W>(rng: &mut R, n: usize, dims: usize, out: W) -> io::Result<()>
where
    R: Rng,
    W: Write,
{
    let mut out = BufWriter::new(out);
    writeln!(out, "{dims}")?;
    writeln!(out, "{n}")?;

    let mut point = Vec::with_capacity(dims);
    for _ in 0..n {
        worst_case_point(rng, dims, &mut point);
        for (k, value) in point.iter().enumerate() {
            if k > 0 {
                write!(out, " ")?;
            }
            write!(out, "{value:.6}")?;
        }
        writeln!(out)?;
    }

    out.flush()
}
