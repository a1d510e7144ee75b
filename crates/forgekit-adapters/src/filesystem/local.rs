//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use forgekit_core::application::{Filesystem, GenerationError};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), GenerationError> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), GenerationError> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GenerationError {
    GenerationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_existence() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let dir = tmp.path().join("a/b");
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));

        let file = dir.join("out.txt");
        fs.write_file(&file, b"content").unwrap();
        assert_eq!(std::fs::read(&file).unwrap(), b"content");
    }

    #[test]
    fn write_into_missing_parent_maps_to_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let result = fs.write_file(&tmp.path().join("missing/out.txt"), b"x");
        assert!(matches!(result, Err(GenerationError::Filesystem { .. })));
    }
}
