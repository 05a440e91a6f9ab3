// tests/integration/statistics_output.rs
use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn short_statistics_count_each_type() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n2.5\nhello\n");

    ws.command()
        .args(["-s", "-o", "out", "in.txt"])
        .assert()
        .success()
        .stdout("Integers written: 1\nFloats written:   1\nStrings written:  1\n");
}

#[test]
fn full_statistics_for_small_integers() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n2\n3\n");

    ws.command()
        .args(["-f", "-o", "out", "in.txt"])
        .assert()
        .success()
        .stdout(
            "Integers:\n  Count = 3\n  Min   = 1\n  Max   = 3\n  Sum   = 6\n  Avg   = 2\n\
             Floats: no data\n\
             Strings: no data\n",
        );
}

#[test]
fn full_statistics_cover_strings_and_floats() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "abc\n 1.5\n2.5 \n  hello  \n");

    ws.command()
        .args(["-f", "-o", "out", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Integers: no data\nFloats:\n  Count = 2\n"))
        .stdout(predicate::str::contains("  Min   = 1.5\n  Max   = 2.5\n"))
        .stdout(predicate::str::contains("  Avg   = 2.0\n"))
        .stdout(predicate::str::ends_with("Strings:\n  Count     = 2\n  MinLength = 3\n  MaxLength = 9\n"));
}

#[test]
fn statistics_are_printed_even_when_inputs_fail() {
    let ws = TempWorkspace::new();

    ws.command()
        .args(["-s", "-o", "out", "missing.txt"])
        .assert()
        .code(1)
        .stdout("Integers written: 0\nFloats written:   0\nStrings written:  0\n");
}
