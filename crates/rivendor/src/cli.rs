//! CLI argument definitions for rivendor.
//!
//! All clap derive structs live here. The [`Cli`] struct is the top-level
//! parser; [`Commands`] enumerates every subcommand.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::migrate::SYSTEMS;

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// A govendor-compatible vendoring tool.
#[derive(Parser, Debug)]
#[command(
    name = "rivendor",
    author,
    version,
    about = "A govendor-compatible vendoring tool.",
    styles = STYLES,
    after_help = "Use `rivendor help <command>` for more information on a specific command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity.
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output.
    #[arg(global = true, short, long)]
    pub quiet: bool,
}

/// Top-level subcommands for rivendor.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate a legacy vendoring configuration to vendor/vendor.json.
    Migrate(MigrateArgs),
}

/// Sentinel system name that selects auto-detection.
pub const AUTO: &str = "auto";

/// Arguments for `rivendor migrate`.
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// The system to migrate from. Detected automatically when omitted.
    #[arg(value_parser = PossibleValuesParser::new(
        std::iter::once(AUTO).chain(SYSTEMS.iter().map(|system| system.name()))
    ))]
    pub system: Option<String>,

    /// The project root. Defaults to the current directory.
    #[arg(long, env = "RIVENDOR_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// List the supported systems and exit.
    #[arg(long, conflicts_with = "system")]
    pub list: bool,
}

impl MigrateArgs {
    /// The explicitly requested system, if any.
    pub fn requested_system(&self) -> Option<&str> {
        self.system.as_deref().filter(|name| *name != AUTO)
    }
}
