//! rivendor: a govendor-compatible vendoring tool.
//!
//! This crate provides the entry point and command dispatch for the rivendor
//! binary, the `vendor/vendor.json` manifest model, and the migration of
//! legacy vendoring tools (see [`migrate`]) into that manifest.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod printer;
pub mod vendorfile;

pub use error::{Error, Result};

/// Entry point for the rivendor CLI.
///
/// Parses CLI arguments, installs the log subscriber, and dispatches to the
/// appropriate command handler. Errors are rendered with their cause chain.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    logging::setup(cli.verbose, cli.quiet);
    let printer = Printer::new(cli.verbose, cli.quiet);

    match commands::dispatch(cli.command, printer) {
        Ok(code) => code.into(),
        Err(err) => {
            let mut causes = err.chain();
            // An anyhow::Error always has at least one cause (itself).
            if let Some(head) = causes.next() {
                printer.error(&head.to_string());
            }
            for cause in causes {
                eprintln!(
                    "  {}: {}",
                    "Caused by".red().bold(),
                    cause.to_string().trim()
                );
            }
            ExitStatus::Error.into()
        }
    }
}
