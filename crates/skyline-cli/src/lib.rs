//! Command-line front ends for skyline computation.
//!
//! This crate backs the executables of the workspace:
//!
//! * `skyline`, `skyline-shared`, `skyline-distributed`: read a point set on
//!   stdin, write its skyline on stdout.
//! * `inputgen`: write a worst-case dataset in which every point survives.
//! * `timer`: run another executable and report its wall-clock time.
//!
//! Diagnostics and timing go to stderr through `log` and `flexi_logger`.

/// Logger setup shared by every executable.
pub mod logging;

/// The read, filter and write flow of the filter executables.
pub mod run;

/// Worst-case input generation.
pub mod generate;

/// Wall-clock timing of external commands.
pub mod timing;
