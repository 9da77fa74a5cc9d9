//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the targetree library against real directory layouts.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use targetree::fs::LocalLister;
use targetree::path::PosixSyntax;
use targetree::{Result, Tree, TreeResolver};

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Builder for creating directory layouts on disk.
///
/// # Examples
///
/// ```no_run
/// # use common::LayoutFixture;
/// let layout = LayoutFixture::new()
///     .with_file("foo/user1/notes.txt")
///     .with_dir("foo/user2")
///     .build();
/// ```
#[allow(dead_code)]
pub struct LayoutFixture {
    dirs: Vec<String>,
    files: Vec<String>,
}

#[allow(dead_code)]
impl LayoutFixture {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a directory, relative to the layout root.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.push(path.to_string());
        self
    }

    /// Adds an empty file, creating its parent directories.
    pub fn with_file(mut self, path: &str) -> Self {
        self.files.push(path.to_string());
        self
    }

    /// Creates the layout in a fresh temporary directory.
    pub fn build(self) -> TempDir {
        let temp = create_temp_dir().expect("failed to create temp dir");
        for dir in &self.dirs {
            fs::create_dir_all(temp.path().join(dir)).expect("failed to create dir");
        }
        for file in &self.files {
            let path = temp.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("failed to create parent dir");
            }
            fs::write(&path, b"").expect("failed to create file");
        }
        temp
    }
}

impl Default for LayoutFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves POSIX `targets` with relative paths listed under `base`.
#[allow(dead_code)]
pub fn resolve_in(base: &Path, targets: &[&str]) -> Result<Tree> {
    let lister = LocalLister::with_base_dir(base);
    TreeResolver::new(&PosixSyntax, &lister).resolve(targets)
}
