//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory populated from a list of entries.
    ///
    /// Entries ending in `/` become directories, everything else an empty file.
    pub fn with_entries(entries: &[&str]) -> Self {
        let tree = Self::new();
        for entry in entries {
            if let Some(dir) = entry.strip_suffix('/') {
                tree.add_dir(dir);
            } else {
                tree.add_file(entry, "");
            }
        }
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a tree `depth` levels deep with `width` files and one
    /// subdirectory per level.
    pub fn nested(depth: usize, width: usize) -> Self {
        let tree = Self::new();
        let mut current = String::new();
        for level in 0..depth {
            for i in 0..width {
                tree.add_file(&format!("{}file_{}_{}.txt", current, level, i), "");
            }
            current.push_str(&format!("dir_{}/", level));
            tree.add_dir(&current);
        }
        tree
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
