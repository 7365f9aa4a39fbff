//! Shared helpers for integration tests
#![allow(dead_code)]

pub mod mocks;

use std::path::PathBuf;

/// Absolute path of a file under `tests/fixtures`
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Contents of a file under `tests/fixtures`
pub fn fixture(relative: &str) -> String {
    std::fs::read_to_string(fixture_path(relative))
        .unwrap_or_else(|e| panic!("missing fixture {}: {}", relative, e))
}
