//! Test fixture helpers for creating temporary test data.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary workspace with a database path and an optional preferences file.
///
/// The directory is removed when the value is dropped.
pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a workspace whose preferences file holds `contents`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_preferences(contents: &str) -> Self {
        let ws = Self::new();
        std::fs::write(ws.preferences_path(), contents).expect("Failed to write preferences");
        ws
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("data").join("peripherals.db")
    }

    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.dir.path().join("preferences.toml")
    }
}
