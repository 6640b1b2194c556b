//! Shared-memory skyline filter: point set on stdin, skyline on stdout.

use std::process::ExitCode;

use clap::Parser;
use fastSkyline::prelude::default_workers;
use log::debug;
use skyline_cli::logging::{DEFAULT_LEVEL, init_logging};
use skyline_cli::run::{Strategy, run};

/// Compute the skyline of the point set read on stdin on a pool of worker threads.
#[derive(Parser, Debug)]
#[command(name = "skyline-shared", version, long_about = None)]
struct Cli {
    /// Number of worker threads (defaults to the number of available CPUs).
    #[arg(long, env = "SKYLINE_THREADS")]
    threads: Option<usize>,

    /// Diagnostic log level on stderr (RUST_LOG takes precedence).
    #[arg(long, default_value = DEFAULT_LEVEL)]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match init_logging(&cli.log_level) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    let threads = cli.threads.unwrap_or_else(default_workers);
    debug!("using {threads} worker threads");

    run(Strategy::SharedMemory { threads })
}
