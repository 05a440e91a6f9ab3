// tests/integration/cli_usage.rs
use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn shows_help() {
    TempWorkspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_filter"))
        .stdout(predicate::str::contains("-s"));
}

#[test]
fn shows_version() {
    TempWorkspace::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_and_full_are_mutually_exclusive() {
    let ws = TempWorkspace::new();
    let input = ws.create_file("in.txt", "1\n");

    ws.command()
        .args(["-s", "-f"])
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Options -s and -f are mutually exclusive (specify only one)."));
    assert!(!ws.out_dir().exists());
}

#[test]
fn missing_inputs_is_a_usage_error() {
    TempWorkspace::new()
        .command()
        .arg("-s")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Lack of required parameters:"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    TempWorkspace::new()
        .command()
        .args(["--bogus", "in.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown option/parameter"));
}
