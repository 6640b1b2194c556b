//! Worst-case input generator: every generated point belongs to the skyline.

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use skyline_cli::generate::{DEFAULT_DIMS, DEFAULT_POINTS, write_worst_case};

/// Write N points in D dimensions whose coordinates all sum to the same budget.
#[derive(Parser, Debug)]
#[command(name = "inputgen", version, long_about = None)]
struct Cli {
    /// Number of points.
    #[arg(default_value_t = DEFAULT_POINTS)]
    n: usize,

    /// Dimensionality (at least 2).
    #[arg(default_value_t = DEFAULT_DIMS)]
    d: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.d < 2 {
        Cli::command()
            .error(ErrorKind::ValueValidation, "D must be at least 2")
            .exit();
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match write_worst_case(&mut rng, cli.n, cli.d, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}
