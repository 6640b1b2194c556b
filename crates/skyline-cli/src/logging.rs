//! Logger bootstrap for the executables.
//!
//! # Responsibility
//! - Route `log` records to stderr so stdout carries only results.
//! - Honor `RUST_LOG` when set, otherwise use the level given on the command line.
//!
//! # Invariants
//! - Initialization never panics; failures are returned as text.

use flexi_logger::{Logger, LoggerHandle, WriteMode};

/// Level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Start logging to stderr at `level`.
///
/// The returned handle must stay alive for the lifetime of the process.
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}
