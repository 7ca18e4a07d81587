//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "KBID,Title,PackageName,ManagedCoverageBegin,ManagedCoverageEnd,\
CustomCoverageBegin,CustomCoverageEnd,Embargo,HideOnPublicationFinder";

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write a holdings CSV with the standard header and the given rows.
    pub fn write_holdings(&self, rows: &[&str]) -> PathBuf {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');

        let path = self.root.join("holdings.csv");
        fs::write(&path, content).expect("Failed to write holdings fixture");
        path
    }

    /// Write a raw CSV file verbatim (for malformed-structure cases).
    pub fn write_raw_holdings(&self, content: &str) -> PathBuf {
        let path = self.root.join("holdings.csv");
        fs::write(&path, content).expect("Failed to write holdings fixture");
        path
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.join("covlap.toml");
        fs::write(&path, content).expect("Failed to write config fixture");
        path
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.join("reports")
    }

    pub fn read_report(&self, name: &str) -> String {
        let path = self.out_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Failed to read report: {}", path.display()))
    }

    pub fn command(&self) -> Command {
        Command::cargo_bin("covlap").expect("covlap binary")
    }
}
