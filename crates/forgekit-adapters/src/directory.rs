//! Project root allocation.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;
use uuid::Uuid;

use forgekit_core::application::{DirectoryFactory, GenerationError};
use forgekit_core::domain::ResolvedRequest;

/// Allocates unique project root directories under a base path.
///
/// Each allocation combines the request name, a process-local serial and a
/// random token, so paths never collide across concurrent attempts or
/// process restarts. The directory is created before the path is handed
/// back, satisfying the exists-and-empty contract of the port.
#[derive(Debug)]
pub struct TempDirFactory {
    root: PathBuf,
    counter: AtomicU64,
}

impl TempDirFactory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Base path under which project roots are allocated.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DirectoryFactory for TempDirFactory {
    fn allocate(&self, request: &ResolvedRequest) -> Result<PathBuf, GenerationError> {
        let serial = self.counter.fetch_add(1, Ordering::Relaxed);
        let token = Uuid::new_v4().simple();
        let path = self
            .root
            .join(format!("{}-{serial}-{token}", request.name));

        std::fs::create_dir_all(&path).map_err(|e| GenerationError::DirectoryAllocation {
            reason: format!("could not create {}: {e}", path.display()),
        })?;
        trace!(path = %path.display(), "allocated project root");
        Ok(path)
    }
}
