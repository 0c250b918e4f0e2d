//! Migration from glide.
//!
//! Glide keeps two files in the project root: `glide.yaml`, written by hand,
//! and `glide.lock`, generated from it with every transitive dependency
//! resolved and pinned. Only the lockfile is read.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::context::{Context, ContextOptions};
use crate::error::{Error, Result};
use crate::migrate::{System, has_files, join_path, remove_all};
use crate::vendorfile::Package;

const LOCK_FILE: &str = "glide.lock";
const CONFIG_FILE: &str = "glide.yaml";

/// Ignore pattern written to the new vendor file: skip `_test.go` files.
const IGNORE_TESTS: &str = "test";

/// The glide vendoring system.
#[derive(Debug, Clone, Copy)]
pub struct Glide;

impl System for Glide {
    fn name(&self) -> &'static str {
        "glide"
    }

    fn check(&self, root: &Path) -> Result<bool> {
        Ok(has_files(root, &[LOCK_FILE]))
    }

    fn migrate(&self, root: &Path) -> Result<()> {
        let mut ctx = Context::new(root, ContextOptions::default())?;
        ctx.vendor_file.ignore = IGNORE_TESTS.to_owned();

        let lock = GlideLock::from_path(&root.join(LOCK_FILE))?;
        ctx.vendor_file
            .package
            .extend(packages_from_imports(lock.imports));
        ctx.write_vendor_file()?;

        if let Err(err) = remove_all(&root.join(CONFIG_FILE)) {
            debug!("Failed to remove {CONFIG_FILE}: {err}");
        }
        remove_all(&root.join(LOCK_FILE))?;
        Ok(())
    }
}

/// The parts of `glide.lock` the migration needs.
#[derive(Debug, Default, Deserialize)]
pub struct GlideLock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub imports: Vec<GlideImport>,
}

impl GlideLock {
    /// Parse a lockfile from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        Self::parse(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty lockfile is a lock with no imports.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// A resolved dependency in `glide.lock`.
#[derive(Debug, Deserialize)]
pub struct GlideImport {
    /// Import path of the repository root.
    #[serde(default)]
    pub name: String,

    /// Pinned revision.
    #[serde(default)]
    pub version: String,

    /// Alternate location to fetch from.
    #[serde(default)]
    pub repo: Option<String>,

    /// Packages used below `name`, relative to it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subpackages: Vec<String>,
}

impl GlideImport {
    fn origin(&self) -> Option<&str> {
        self.repo.as_deref().filter(|repo| !repo.is_empty())
    }
}

/// Convert lockfile imports into vendor file packages.
///
/// Each import yields one package per subpackage followed by one for the
/// import itself, all pinned to the import's version.
pub fn packages_from_imports(imports: Vec<GlideImport>) -> Vec<Package> {
    let mut packages = Vec::with_capacity(imports.len());
    for import in imports {
        let origin = import.origin();
        for subpackage in &import.subpackages {
            let path = join_path(&import.name, subpackage);
            let package = Package::added(path, &*import.version)
                .with_origin(origin.map(|repo| join_path(repo, subpackage)));
            trace!("Adding {} at {}", package.path, package.revision);
            packages.push(package);
        }

        let package = Package::added(&*import.name, &*import.version)
            .with_origin(origin.map(str::to_owned));
        trace!("Adding {} at {}", package.path, package.revision);
        packages.push(package);
    }
    packages
}

/// Glide writes `key:` with no value for empty lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
