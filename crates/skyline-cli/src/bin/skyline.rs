//! Sequential skyline filter: point set on stdin, skyline on stdout.

use std::process::ExitCode;

use clap::Parser;
use skyline_cli::logging::{DEFAULT_LEVEL, init_logging};
use skyline_cli::run::{Strategy, run};

/// Compute the skyline of the point set read on stdin with the sequential kernel.
#[derive(Parser, Debug)]
#[command(name = "skyline", version, long_about = None)]
struct Cli {
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

    run(Strategy::Sequential)
}
