//! Wall-clock timer for an external executable.
//!
//! ```text
//! timer <executable> [args...] < input
//! ```

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use skyline_cli::logging::{DEFAULT_LEVEL, init_logging};
use skyline_cli::timing::time_command;

/// Run an executable with stdout discarded and report its execution time on stderr.
#[derive(Parser, Debug)]
#[command(name = "timer", version, long_about = None)]
struct Cli {
    /// Executable followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match init_logging(DEFAULT_LEVEL) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some((program, args)) = cli.command.split_first() else {
        return ExitCode::FAILURE;
    };

    match time_command(program, args) {
        Ok(elapsed) => {
            eprintln!("\nExecution time {:.6} seconds", elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}: {e}", program.to_string_lossy());
            eprintln!("External command failed: {}", program.to_string_lossy());
            ExitCode::FAILURE
        }
    }
}
