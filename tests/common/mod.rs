//! Common test utilities for sql-attributes tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sql_attributes::{Arguments, SqlAttribute};
use tempfile::TempDir;

/// Build an attribute from a name and `(key, value)` pairs
pub fn attr(name: &str, args: &[(&str, &str)]) -> SqlAttribute {
    SqlAttribute::new(name, args.iter().copied().collect::<Arguments>())
}

/// The three `MetaData` attributes used throughout the corpus
pub fn metadata_lower() -> SqlAttribute {
    attr("MetaData", &[("foo", "a"), ("bar", "b"), ("baz", "c")])
}

pub fn metadata_upper() -> SqlAttribute {
    attr("MetaData", &[("foo", "A"), ("bar", "B"), ("baz", "C")])
}

pub fn metadata_greek() -> SqlAttribute {
    attr("MetaData", &[("foo", "α"), ("bar", "β"), ("baz", "γ")])
}

/// Test context with a temporary directory of SQL sources
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write a file relative to the context root, creating parent directories
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Path relative to the context root, for readable assertions
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
