//! Tests for reading `vendor.json` through the public data model.

use rivendor::vendorfile::{Package, VendorFile};

#[test]
fn parse_vendor_file_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("vendor.json");
    fs_err::write(
        &path,
        r#"{
	"comment": "pinned for release",
	"ignore": "test appengine",
	"package": [
		{
			"checksumSHA1": "a1b2c3=",
			"path": "github.com/pkg/errors",
			"revision": "645ef00459ed84a119197bfb8d8205042c6df63d",
			"revisionTime": "2016-09-29T01:48:01Z",
			"version": "v0.8.0",
			"versionExact": "v0.8.0"
		}
	],
	"rootPath": "github.com/example/app"
}
"#,
    )
    .unwrap();

    let vendor_file = VendorFile::from_path(&path).expect("Failed to parse vendor.json");

    assert_eq!(vendor_file.comment, "pinned for release");
    assert_eq!(vendor_file.ignore, "test appengine");
    assert_eq!(vendor_file.root_path.as_deref(), Some("github.com/example/app"));

    let package = vendor_file.find("github.com/pkg/errors").unwrap();
    assert_eq!(package.version, "v0.8.0");
    assert_eq!(package.version_exact, "v0.8.0");
    assert!(!package.tree);
}

#[test]
fn optional_fields_round_trip() {
    let vendor_file = VendorFile {
        comment: "kept".to_owned(),
        package: vec![Package {
            checksum_sha1: "a1b2c3=".to_owned(),
            revision_time: "2016-09-29T01:48:01Z".to_owned(),
            tree: true,
            ..Package::added("github.com/pkg/errors", "645ef004")
        }],
        root_path: Some("github.com/example/app".to_owned()),
        ..VendorFile::default()
    };

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("vendor").join("vendor.json");
    vendor_file.write_to(&path).unwrap();
    let reparsed = VendorFile::from_path(&path).unwrap();

    // Everything but the in-memory `add` marker survives.
    let mut expected = vendor_file;
    expected.package[0].add = false;
    assert_eq!(reparsed, expected);
}

#[test]
fn malformed_vendor_file_names_the_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("vendor.json");
    fs_err::write(&path, "{ not json").unwrap();

    let err = VendorFile::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("vendor.json"), "got: {err}");
}

#[test]
fn missing_vendor_file_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = VendorFile::from_path(&dir.path().join("vendor.json")).unwrap_err();
    assert!(matches!(err, rivendor::Error::Io(_)));
}
