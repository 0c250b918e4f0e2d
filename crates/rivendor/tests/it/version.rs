use crate::common::rivendor_command;

#[test]
fn version_flag_shows_version() {
    let mut cmd = rivendor_command();
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute rivendor");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.starts_with("rivendor "),
        "Expected version string starting with 'rivendor ', got: {stdout}"
    );
}

#[test]
fn short_version_flag_works() {
    let mut cmd = rivendor_command();
    cmd.arg("-V");

    let output = cmd.output().expect("Failed to execute rivendor");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.starts_with("rivendor "),
        "Expected version string starting with 'rivendor ', got: {stdout}"
    );
}
