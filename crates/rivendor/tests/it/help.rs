use crate::common::{INSTA_FILTERS, rivendor_command, rivendor_help};
use crate::rivendor_snapshot;

#[test]
fn help_shows_all_commands() {
    rivendor_snapshot!(&INSTA_FILTERS, rivendor_help(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    A govendor-compatible vendoring tool.

    Usage: rivendor [OPTIONS] <COMMAND>

    Commands:
      migrate  Migrate a legacy vendoring configuration to vendor/vendor.json
      help     Print this message or the help of the given subcommand(s)

    Options:
      -v, --verbose...  Increase logging verbosity
      -q, --quiet       Suppress all output
      -h, --help        Print help
      -V, --version     Print version

    Use `rivendor help <command>` for more information on a specific command.
    ----- stderr -----
    "#);
}

#[test]
fn help_migrate() {
    let mut cmd = rivendor_command();
    cmd.args(["help", "migrate"]);

    let output = cmd.output().expect("Failed to execute rivendor");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Migrate a legacy vendoring configuration"));
    assert!(stdout.contains("--root"));
    assert!(stdout.contains("RIVENDOR_ROOT"));
    assert!(stdout.contains("--list"));
    assert!(stdout.contains("glide"));
}

#[test]
fn unknown_system_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut cmd = crate::common::rivendor_migrate(tmp.path());
    cmd.arg("godep");

    let output = cmd.output().expect("Failed to execute rivendor");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("invalid value 'godep'"), "got: {stderr}");
}

#[test]
fn unknown_command_errors() {
    let mut cmd = rivendor_command();
    cmd.arg("nonexistent");

    let output = cmd.output().expect("Failed to execute rivendor");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn no_args_shows_help() {
    let mut cmd = rivendor_command();

    let output = cmd.output().expect("Failed to execute rivendor");
    let stderr = String::from_utf8_lossy(&output.stderr);

    // clap errors with "requires a subcommand" when no subcommand given
    assert!(!output.status.success());
    assert!(
        stderr.contains("Usage") || stderr.contains("subcommand"),
        "Expected usage info in stderr, got: {stderr}"
    );
}
