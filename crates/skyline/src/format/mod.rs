//! Text input and output of point sets.
//!
//! # Purpose
//!
//! This module reads a point set from the whitespace-separated text format
//! and writes skyline results in the same format, so that a result can be
//! fed back as input.
//!
//! ```text
//! D [rest of the line is ignored]
//! N
//! p0,0 p0,1 ... p0,D-1
//! ...
//! pN-1,0 ... pN-1,D-1
//! ```
//!
//! Output replaces N with the skyline size r and prints each coordinate
//! with six fractional digits.

/// Parsing of the text input format.
pub mod reader;

/// Writing of the text output format.
#[cfg(feature = "std")]
pub mod writer;
