//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the engine needs from external collaborators.
//! The `forgekit-adapters` crate provides the implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::error::GenerationError;
use crate::application::outcome::GenerationOutcome;
use crate::domain::{MetadataSnapshot, ResolvedRequest};

/// Port for the metadata catalog.
///
/// Implemented by:
/// - `forgekit_adapters::catalog::SwappableMetadataProvider`
///
/// Each call returns an internally consistent snapshot. Replacement is
/// atomic with respect to in-flight resolutions: holding the returned `Arc`
/// guarantees a request sees the old snapshot in full or the new one in
/// full, never a mix.
pub trait MetadataProvider: Send + Sync {
    fn snapshot(&self) -> Arc<MetadataSnapshot>;
}

/// Port for project root allocation.
///
/// Implemented by:
/// - `forgekit_adapters::directory::TempDirFactory` (production)
///
/// `allocate` must return a path to a directory that exists and is empty,
/// must never return the same path twice across the process lifetime, and
/// must be safe under concurrent calls from independent attempts.
pub trait DirectoryFactory: Send + Sync {
    fn allocate(&self, request: &ResolvedRequest) -> Result<PathBuf, GenerationError>;
}

/// Port for outcome notification.
///
/// Implemented by:
/// - `forgekit_adapters::events::LogPublisher` (production)
/// - `forgekit_adapters::events::JsonLinesPublisher` (production)
/// - `forgekit_adapters::events::RecordingPublisher` (testing)
///
/// Called exactly once per generation attempt that opened a context. A
/// publisher must not block the caller indefinitely (fire-and-forget or
/// bounded-wait).
pub trait EventPublisher: Send + Sync {
    fn publish(&self, outcome: GenerationOutcome);
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `forgekit_adapters::filesystem::LocalFilesystem` (production)
/// - `forgekit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The materializer's writes through this port are the engine's only
/// blocking I/O.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), GenerationError>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), GenerationError>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
