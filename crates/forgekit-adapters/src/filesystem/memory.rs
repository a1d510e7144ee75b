//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use forgekit_core::application::{Filesystem, GenerationError};

/// In-memory filesystem for testing.
///
/// Enforces the same parent-must-exist rule a real filesystem has, so
/// materializer bugs surface in tests instead of on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), GenerationError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), GenerationError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(GenerationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                });
            }
        }
        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_register_all_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/src/resources")).unwrap();
        assert!(fs.exists(Path::new("/out")));
        assert!(fs.exists(Path::new("/out/src")));
        assert!(fs.exists(Path::new("/out/src/resources")));
    }

    #[test]
    fn writes_require_an_existing_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("/out/file.txt"), b"x");
        assert!(matches!(err, Err(GenerationError::Filesystem { .. })));

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/file.txt"), b"x").unwrap();
        assert_eq!(fs.read_file(Path::new("/out/file.txt")).unwrap(), b"x");
    }
}
