//! Filesystem adapters implementing the core `Filesystem` port.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
