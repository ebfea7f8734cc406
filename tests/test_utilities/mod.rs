#![allow(dead_code)]

pub mod mocks;

use std::path::PathBuf;

pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn read_fixture(project: &str, file: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(project).join(file)).unwrap()
}
