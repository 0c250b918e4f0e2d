//! `rivendor migrate`: convert a legacy vendoring configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::MigrateArgs;
use crate::commands::ExitStatus;
use crate::context::{VENDOR_FILE, VENDOR_FOLDER};
use crate::migrate::{self, SYSTEMS};
use crate::printer::Printer;

/// Execute `rivendor migrate`.
pub(crate) fn execute(args: &MigrateArgs, printer: Printer) -> Result<ExitStatus> {
    if args.list {
        for system in SYSTEMS {
            printer.stdout(system.name());
        }
        return Ok(ExitStatus::Success);
    }

    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to determine the current directory")?,
    };
    printer.debug(&format!("Project root: {}", root.display()));

    let migrated = migrate::migrate(&root, args.requested_system())
        .with_context(|| format!("Failed to migrate project at `{}`", root.display()))?;

    match migrated {
        Some(name) => {
            let manifest: PathBuf = [VENDOR_FOLDER, VENDOR_FILE].iter().collect();
            printer.info(&format!("Wrote {}", manifest.display()));
            printer.success(&format!("Migrated from {name}."));
            Ok(ExitStatus::Success)
        }
        None => {
            printer.warn("No legacy vendoring configuration found.");
            Ok(ExitStatus::Failure)
        }
    }
}
