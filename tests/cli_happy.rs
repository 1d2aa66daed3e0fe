mod common;

use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn stdin_to_stdout_single_batch() {
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .args(["--stdout", "--no-clipboard", "-s", "2", "-k", "1"])
        .write_stdin(" alpha\n\n beta \n gamma\n delta\n")
        .assert()
        .success()
        .stdout("gamma\ndelta\n")
        .stderr(contains("OK 4 items in 2 batches (2 empty, 0 invalid, 0 duplicates removed)"));
}

#[test]
fn file_input_all_batches_sql() {
    let dir = common::input_fixture("O'Reilly,x,y");
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .current_dir(&dir)
        .args(["input.txt", "--stdout", "--no-clipboard", "-s", "2", "-t", "sql-in"])
        .assert()
        .success()
        .stdout("('O''Reilly', 'x')\n\n('y')\n");
}

#[test]
fn validation_reports_examples() {
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .args([
            "--stdout",
            "--no-clipboard",
            "-d",
            "newline",
            "--validate",
            "custom-regex",
            "--pattern",
            "^[A-Z0-9]+$",
        ])
        .write_stdin("AB12\nzz99\nBAD-1")
        .assert()
        .success()
        .stdout("AB12\n")
        .stderr(contains("2 invalid"))
        .stderr(contains("invalid examples: zz99, BAD-1"));
}

#[test]
fn dedupe_case_insensitive_json() {
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .args([
            "--stdout",
            "--no-clipboard",
            "--dedupe",
            "case-insensitive",
            "-t",
            "json-array",
        ])
        .write_stdin("ABC\nabc\nAbc\nxyz")
        .assert()
        .success()
        .stdout("[\n  \"ABC\",\n  \"xyz\"\n]\n")
        .stderr(contains("2 duplicates removed"));
}

#[test]
fn blank_input_produces_no_batches() {
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .args(["--stdout", "--no-clipboard"])
        .write_stdin(" \n\n  ")
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(contains("OK 0 items in 0 batches"));
}

#[test]
fn write_selected_batch_to_file() {
    let dir = common::input_fixture("a\nb\nc");
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .current_dir(&dir)
        .args(["input.txt", "--no-clipboard", "-m", "target-group-count", "-s", "2", "-k", "1", "-w", "out/b.txt"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
    let written = std::fs::read_to_string(dir.path().join("out/b.txt")).unwrap();
    assert_eq!(written, "c");
    assert!(predicate::path::exists().eval(&dir.path().join("out")));
}
