mod common;

use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn export_writes_one_archive_with_batches_and_manifest() {
    let dir = common::input_fixture("a\"b\nc\nd");
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .current_dir(&dir)
        .args(["input.txt", "--no-clipboard", "-s", "2", "-t", "quoted-csv", "-e", "out/batches.tar.gz"])
        .assert()
        .success()
        .stderr(predicate::str::contains("exported out/batches.tar.gz"));

    dir.child("out/batches.tar.gz").assert(predicate::path::is_file());
    let entries = common::archive_entries(&dir.path().join("out/batches.tar.gz"));
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["batch-1.csv", "batch-2.csv", "manifest.json"]);
    assert_eq!(entries[0].1, "\"a\"\"b\",\"c\"");
    assert_eq!(entries[1].1, "\"d\"");

    let manifest: serde_json::Value = serde_json::from_str(&entries[2].1).unwrap();
    assert_eq!(manifest["batchCount"], 2);
    assert_eq!(manifest["totalItems"], 3);
    assert_eq!(manifest["template"], "quoted_csv");
    assert_eq!(manifest["entries"][1]["filename"], "batch-2.csv");
    assert_eq!(manifest["entries"][1]["itemCount"], 1);
}

#[test]
fn export_into_directory_uses_timestamped_name() {
    let dir = common::input_fixture("a\nb\nc");
    assert_cmd::cargo::cargo_bin_cmd!("splitbox")
        .current_dir(&dir)
        .args(["input.txt", "--no-clipboard", "-s", "1", "-e", "."])
        .assert()
        .success();

    let archives: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("splitbox-batches-") && n.ends_with(".tar.gz"))
        .collect();
    assert_eq!(archives.len(), 1);
    let entries = common::archive_entries(&dir.path().join(&archives[0]));
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[2], ("batch-3.txt".to_string(), "c".to_string()));
}
