//! Distributed skyline coordinator: point set on stdin, skyline on stdout.
//!
//! Takes no arguments. The number of ranks comes from `SKYLINE_WORKERS`
//! (defaults to the number of available CPUs); logging follows `RUST_LOG`.

use std::env;
use std::process::ExitCode;

use clap::Parser;
use fastSkyline::prelude::default_workers;
use log::debug;
use skyline_cli::logging::{DEFAULT_LEVEL, init_logging};
use skyline_cli::run::{Strategy, run};

const WORKERS_VAR: &str = "SKYLINE_WORKERS";

/// Compute the skyline of the point set read on stdin across message-passing ranks.
#[derive(Parser, Debug)]
#[command(name = "skyline-distributed", version, long_about = None)]
struct Cli {}

fn ranks_from_env() -> Result<usize, String> {
    match env::var(WORKERS_VAR) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("{WORKERS_VAR} must be a positive integer, got '{value}'")),
        Err(env::VarError::NotPresent) => Ok(default_workers()),
        Err(e) => Err(format!("{WORKERS_VAR}: {e}")),
    }
}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let _logger = match init_logging(DEFAULT_LEVEL) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ranks = match ranks_from_env() {
        Ok(ranks) => ranks,
        Err(e) => {
            eprintln!("FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("using {ranks} ranks");

    run(Strategy::Distributed { ranks })
}
