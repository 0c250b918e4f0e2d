//! Migration from legacy vendoring tools.
//!
//! Each supported tool is a [`System`]: a detect step that checks the project
//! root for the tool's files, and a migrate step that rewrites them into
//! `vendor/vendor.json` and removes the originals. Systems are listed in the
//! static [`SYSTEMS`] table and tried in order by [`detect`].

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub mod glide;

/// A legacy vendoring tool that can be migrated.
pub trait System: Sync {
    /// Short name used on the command line (e.g., `"glide"`).
    fn name(&self) -> &'static str;

    /// Whether the project at `root` is managed by this system.
    ///
    /// Returning `false` is the normal "not applicable" outcome, not an error.
    fn check(&self, root: &Path) -> Result<bool>;

    /// Rewrite the system's configuration into the vendor file and delete it.
    fn migrate(&self, root: &Path) -> Result<()>;
}

/// Every supported system, in detection order.
pub static SYSTEMS: &[&dyn System] = &[&glide::Glide];

/// Find a system by name.
pub fn lookup(name: &str) -> Result<&'static dyn System> {
    SYSTEMS
        .iter()
        .copied()
        .find(|system| system.name() == name)
        .ok_or_else(|| Error::UnknownSystem(name.to_owned()))
}

/// Return the first system that manages the project at `root`, if any.
pub fn detect(root: &Path) -> Result<Option<&'static dyn System>> {
    for system in SYSTEMS.iter().copied() {
        if system.check(root)? {
            debug!("Detected {} configuration in {}", system.name(), root.display());
            return Ok(Some(system));
        }
        debug!("No {} configuration in {}", system.name(), root.display());
    }
    Ok(None)
}

/// Migrate the project at `root`.
///
/// With `from`, only the named system is considered and it must apply.
/// Without it, systems are auto-detected. Returns the name of the migrated
/// system, or `None` when nothing was detected.
pub fn migrate(root: &Path, from: Option<&str>) -> Result<Option<&'static str>> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let system = match from {
        Some(name) => {
            let system = lookup(name)?;
            if !system.check(root)? {
                return Err(Error::NotApplicable(system.name()));
            }
            system
        }
        None => match detect(root)? {
            Some(system) => system,
            None => return Ok(None),
        },
    };

    system.migrate(root)?;
    Ok(Some(system.name()))
}

/// Whether every one of `names` exists as a file directly under `root`.
pub(crate) fn has_files(root: &Path, names: &[&str]) -> bool {
    names.iter().all(|name| root.join(name).is_file())
}

/// Remove a file or directory tree. A path that is already gone is not an error.
pub(crate) fn remove_all(path: &Path) -> io::Result<()> {
    let result = if path.is_dir() {
        fs_err::remove_dir_all(path)
    } else {
        fs_err::remove_file(path)
    };
    match result {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

/// Join an import path or repository URL with a relative package path.
///
/// `sub` is cleaned: empty and `.` components are dropped and `..` pops the
/// previous component, climbing into `base` once `sub` has none left. `base`
/// is otherwise kept verbatim apart from a trailing `/`, so URL schemes
/// survive. A `sub` that cleans to nothing yields `base`.
pub(crate) fn join_path(base: &str, sub: &str) -> String {
    let mut components: Vec<&str> = Vec::new();
    let mut parents = 0;
    for component in sub.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if components.pop().is_none() {
                    parents += 1;
                }
            }
            component => components.push(component),
        }
    }

    let mut base = base.trim_end_matches('/');
    for _ in 0..parents {
        base = base
            .rfind('/')
            .map_or("", |index| base[..index].trim_end_matches('/'));
    }

    match (base.is_empty(), components.is_empty()) {
        (_, true) => base.to_owned(),
        (true, false) => components.join("/"),
        (false, false) => format!("{base}/{}", components.join("/")),
    }
}
