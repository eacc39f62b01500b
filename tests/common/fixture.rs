use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Temporary working directory, deleted once dropped.
pub struct Fixture {
    tempdir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { tempdir: tempfile::tempdir().expect("Failed to generate temp directory") }
    }

    /// Path of `filename` within the fixture. The file is not created.
    pub fn path(&self, filename: &str) -> PathBuf {
        self.tempdir.path().join(filename)
    }

    /// Path of `filename`, as a string argument.
    pub fn arg(&self, filename: &str) -> String {
        self.path(filename).display().to_string()
    }

    pub fn write(&self, filename: &str, contents: &str) -> PathBuf {
        let path = self.path(filename);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        path
    }

    pub fn read(&self, filename: &str) -> String {
        let path = self.path(filename);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }
}
