//! Wall-clock timing of an external command.
//!
//! The child inherits stdin and stderr; its stdout is discarded so that
//! only the filtering work, not terminal output, is measured.

use std::ffi::OsString;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Why a timed command did not complete successfully.
#[derive(Debug)]
pub enum TimerError {
    /// The executable could not be started.
    Launch(io::Error),

    /// The executable ran and exited unsuccessfully.
    Failed(ExitStatus),
}

impl Display for TimerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Launch(err) => write!(f, "cannot launch: {err}"),
            Self::Failed(status) => write!(f, "exited with {status}"),
        }
    }
}

impl std::error::Error for TimerError {}

/// Run `program` with `args` and return its elapsed wall-clock time.
pub fn time_command(program: &OsString, args: &[OsString]) -> Result<Duration, TimerError> {
    let started = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
        .map_err(TimerError::Launch)?;

    let elapsed = started.elapsed();

    if !status.success() {
        return Err(TimerError::Failed(status));
    }
    Ok(elapsed)
}
