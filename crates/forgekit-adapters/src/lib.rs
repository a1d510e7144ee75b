//! Infrastructure adapters for Forgekit.
//!
//! This crate implements the ports defined in `forgekit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod directory;
pub mod events;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::SwappableMetadataProvider;
pub use directory::TempDirFactory;
pub use events::{JsonLinesPublisher, LogPublisher, RecordingPublisher};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
