//! Command dispatch for rivendor.

use std::process::ExitCode;

use anyhow::Result;

use crate::cli;
use crate::printer::Printer;

mod migrate;

/// Exit status for rivendor commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed due to an error in the user input.
    Failure,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(command: cli::Commands, printer: Printer) -> Result<ExitStatus> {
    match command {
        cli::Commands::Migrate(args) => migrate::execute(&args, printer),
    }
}
