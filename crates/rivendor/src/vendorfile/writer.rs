//! Vendor file writer: serialize a [`VendorFile`] back to JSON.
//!
//! Output matches govendor byte for byte: tab indentation and a trailing
//! newline, so tools that diff `vendor.json` see no spurious changes.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::vendorfile::model::VendorFile;

impl VendorFile {
    /// Write the vendor file to the given path, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_json_string()?;
        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent)?;
        }
        fs_err::write(path, content)?;
        Ok(())
    }

    /// Serialize the vendor file to a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = Vec::with_capacity(512);
        let mut serializer =
            Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut serializer).map_err(Error::Serialize)?;
        out.push(b'\n');

        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
