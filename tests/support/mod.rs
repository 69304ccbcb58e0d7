#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HTML: &str = "<html><body><h1>Hi</h1><p>text</p></body></html>";
pub const CHECKS: &str = r#"["h1","p","nonexistent-tag"]"#;
pub const EXPECTED: &str = "{\n    \"h1\": true,\n    \"nonexistent-tag\": false,\n    \"p\": true\n}\n";

/// A scratch directory holding a checks file and an html file.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(checks: &str, html: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("checks.json"), checks).unwrap();
        std::fs::write(dir.path().join("index.html"), html).unwrap();
        Fixture { dir }
    }

    /// a directory with no checks file and no document
    pub fn empty() -> Self {
        Fixture {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn checks(&self) -> PathBuf {
        self.path().join("checks.json")
    }
}
