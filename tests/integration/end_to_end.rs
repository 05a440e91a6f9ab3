// tests/integration/end_to_end.rs
use std::fs;

use predicates::prelude::*;

use crate::common::{TempWorkspace, lines};

#[test]
fn sorts_lines_into_prefixed_files() {
    let ws = TempWorkspace::new();
    ws.create_file("in1.txt", "Lorem ipsum dolor sit amet\n45\nПример\n3.1415\n");
    ws.create_file("in2.txt", "Normal form of numbers in Java\n1.528535047E-25\n-0.001\n1234567890123456789\n");

    ws.command()
        .args(["-o", "out", "-p", "sample-", "in1.txt", "in2.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(ws.read_output("sample-integers.txt"), lines(&["45", "1234567890123456789"]));
    assert_eq!(ws.read_output("sample-floats.txt"), lines(&["3.1415", "1.528535047E-25", "-0.001"]));
    assert_eq!(
        ws.read_output("sample-strings.txt"),
        lines(&["Lorem ipsum dolor sit amet", "Пример", "Normal form of numbers in Java"])
    );
}

#[test]
fn append_flag_keeps_previous_results() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\nx\n");

    ws.command().args(["-o", "out", "in.txt"]).assert().success();
    ws.command().args(["-a", "-o", "out", "in.txt"]).assert().success();

    assert_eq!(ws.read_output("integers.txt"), lines(&["1", "1"]));
    assert_eq!(ws.read_output("strings.txt"), lines(&["x", "x"]));
}

#[test]
fn missing_input_is_reported_and_others_still_run() {
    let ws = TempWorkspace::new();
    ws.create_file("ok.txt", "5\n");

    ws.command()
        .args(["-o", "out", "nope.txt", "ok.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such file: nope.txt"));

    assert_eq!(ws.read_output("integers.txt"), lines(&["5"]));
}

#[test]
fn output_path_blocked_by_file_is_fatal() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    ws.create_file("out", "");

    ws.command()
        .args(["-s", "-o", "out", "in.txt", "in.txt"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Integers written: 0"))
        .stderr(predicate::str::starts_with("Fatal output error:"));
}

#[test]
fn disabled_category_is_reported_exactly_once() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n2\n3\ntext\n");
    fs::create_dir_all(ws.out_dir().join("integers.txt")).unwrap();

    let assert = ws.command().args(["-s", "-o", "out", "in.txt"]).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert_eq!(stderr.matches("Cannot write values of type INTEGER").count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("Further values of this type will be skipped."));
    assert_eq!(ws.read_output("strings.txt"), lines(&["text"]));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("Integers written: 0"));
    assert!(stdout.contains("Strings written:  1"));
}
