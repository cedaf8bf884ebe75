//! File system artifact sink.

use std::fs;
use std::path::Path;

use dispatchgen_application::ports::{ArtifactSink, ArtifactSinkError};

/// Writes artifacts to disk using `std::fs`.
///
/// Missing parent directories are created. Existing files are overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemSink;

impl FileSystemSink {
    /// Creates a new `FileSystemSink`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ArtifactSink for FileSystemSink {
    fn write(&self, path: &Path, contents: &str) -> Result<(), ArtifactSinkError> {
        let wrap = |source| ArtifactSinkError::Write {
            path: path.to_path_buf(),
            source,
        };

        // A bare file name has an empty parent
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
        fs::write(path, contents).map_err(wrap)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("include/vk/dispatch.h");

        FileSystemSink::new().write(&path, "#pragma once").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once");
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dispatch.c");

        let sink = FileSystemSink::new();
        sink.write(&path, "old contents").unwrap();
        sink.write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_reports_path_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("dispatch.h");

        let err = FileSystemSink::new().write(&path, "x").unwrap_err();
        let ArtifactSinkError::Write { path: failed, .. } = err;
        assert_eq!(failed, path);
    }
}
