//! Data model types for `vendor.json`.
//!
//! Field order matches the serialized key order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level `vendor.json` structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorFile {
    /// Free-form comment, preserved as written.
    #[serde(default)]
    pub comment: String,

    /// Space separated build tags and file suffixes to skip when vendoring
    /// (e.g., `"test"` skips `_test.go` files).
    #[serde(default)]
    pub ignore: String,

    /// Vendored packages.
    #[serde(default)]
    pub package: Vec<Package>,

    /// Import path of the project root.
    #[serde(rename = "rootPath", default, skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
}

impl VendorFile {
    /// Parse a vendor file from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| Error::VendorFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a package by its import path.
    pub fn find(&self, path: &str) -> Option<&Package> {
        self.package.iter().find(|package| package.path == path)
    }
}

/// A vendored package pinned to a revision.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Marks a package that should be fetched on the next sync. Never persisted.
    #[serde(skip)]
    pub add: bool,

    #[serde(
        rename = "checksumSHA1",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub checksum_sha1: String,

    /// Repository the package is fetched from when it differs from `path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Import path.
    pub path: String,

    /// Pinned VCS revision.
    #[serde(default)]
    pub revision: String,

    #[serde(
        rename = "revisionTime",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub revision_time: String,

    /// Vendor the whole tree below `path`, not just the package itself.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub tree: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(
        rename = "versionExact",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub version_exact: String,
}

impl Package {
    /// Create a package pinned to `revision` and marked for addition.
    pub fn added(path: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            add: true,
            path: path.into(),
            revision: revision.into(),
            ..Self::default()
        }
    }

    /// Set the origin repository.
    #[must_use]
    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        self.origin = origin;
        self
    }
}
