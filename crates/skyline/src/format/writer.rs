//! Writing of the text output format.
//!
//! ## Purpose
//!
//! This module writes a [`SkylineResult`] to any `std::io::Write` sink using
//! the result's `Display` implementation, buffered.
//!
//! ## Non-goals
//!
//! * This module does not choose the sink (stdout, file) for the caller.

// External dependencies
use core::fmt::Display;
use num_traits::Float;
use std::io::{BufWriter, Write};

// Internal dependencies
use crate::engine::output::SkylineResult;
use crate::primitives::errors::SkylineError;

/// Write `result` in the text output format and flush the sink.
pub fn write_skyline<T, W>(result: &SkylineResult<T>, writer: W) -> Result<(), SkylineError>
where
    T: Float + Display,
    W: Write,
{
    let mut out = BufWriter::new(writer);
    write!(out, "{result}")?;
    out.flush()?;
    Ok(())
}
