//! The `vendor/vendor.json` manifest.
//!
//! This module mirrors govendor's manifest schema: a comment, an ignore
//! pattern, the list of vendored packages pinned to revisions, and the import
//! path of the project root. [`VendorFile::from_path`] reads it back and
//! [`VendorFile::write_to`] persists it in govendor's layout (tab-indented
//! JSON, keys in alphabetical order, empty optional fields omitted).

pub mod model;
mod writer;

pub use model::{Package, VendorFile};
