//! The manifest context a migration writes into.
//!
//! A [`Context`] is rooted at a project directory and owns a fresh
//! [`VendorFile`]. Adapters append packages to it and persist it with
//! [`Context::write_vendor_file`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::vendorfile::VendorFile;

/// Default vendor folder, relative to the project root.
pub const VENDOR_FOLDER: &str = "vendor";

/// Default manifest file name inside the vendor folder.
pub const VENDOR_FILE: &str = "vendor.json";

/// Where a [`Context`] vendors packages and stores its manifest.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Folder packages are vendored into, relative to the project root.
    pub vendor_folder: PathBuf,
    /// Manifest path, relative to the project root.
    pub vendor_file: PathBuf,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            vendor_folder: PathBuf::from(VENDOR_FOLDER),
            vendor_file: Path::new(VENDOR_FOLDER).join(VENDOR_FILE),
        }
    }
}

/// A project root together with the manifest being built for it.
#[derive(Debug)]
pub struct Context {
    root: PathBuf,
    options: ContextOptions,
    /// The manifest. Starts empty.
    pub vendor_file: VendorFile,
}

impl Context {
    /// Create a context rooted at `root`, which must be an existing directory.
    pub fn new(root: &Path, options: ContextOptions) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            options,
            vendor_file: VendorFile::default(),
        })
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the vendor folder.
    pub fn vendor_folder(&self) -> PathBuf {
        self.root.join(&self.options.vendor_folder)
    }

    /// Absolute path of the manifest.
    pub fn vendor_file_path(&self) -> PathBuf {
        self.root.join(&self.options.vendor_file)
    }

    /// Persist the manifest, creating its parent directory if needed.
    pub fn write_vendor_file(&self) -> Result<()> {
        let path = self.vendor_file_path();
        self.vendor_file.write_to(&path)?;
        debug!(
            "Wrote {} package(s) to {}",
            self.vendor_file.package.len(),
            path.display()
        );
        Ok(())
    }
}
