#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

/// Temp dir holding `input.txt` with the given contents.
pub fn input_fixture(contents: &str) -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("input.txt").write_str(contents).unwrap();
    td
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `(name, body)` for every entry of a `.tar.gz`, in archive order.
pub fn archive_entries(path: &Path) -> Vec<(String, String)> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .entries()
        .unwrap()
        .map(|entry| {
            let mut entry = entry.unwrap();
            let name = entry.path().unwrap().to_string_lossy().into_owned();
            let mut body = String::new();
            entry.read_to_string(&mut body).unwrap();
            (name, body)
        })
        .collect()
}
