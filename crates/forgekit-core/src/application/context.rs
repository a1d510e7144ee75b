//! Request-scoped generation context.
//!
//! A [`GenerationContext`] binds exactly the three collaborators one attempt
//! needs: an indenting-writer factory bound to one indent strategy, a
//! directory factory bound to one output root, and the metadata snapshot the
//! request was resolved against. It is built fresh per attempt from a
//! [`ContextConfig`] and dropped when the attempt finishes. No context
//! outlives the request it serves, and no two concurrent attempts share one.

use std::sync::Arc;

use tracing::trace;

use crate::application::ports::DirectoryFactory;
use crate::domain::MetadataSnapshot;
use crate::text::IndentingWriterFactory;

/// Mutable binding set an attempt's context is opened from.
///
/// The invoker seeds it with engine-wide defaults; the caller-supplied
/// configurer may then substitute bindings (a test directory factory, a
/// different indent strategy) before the context opens.
pub struct ContextConfig {
    pub writers: IndentingWriterFactory,
    pub directories: Arc<dyn DirectoryFactory>,
    pub snapshot: Arc<MetadataSnapshot>,
}

impl ContextConfig {
    pub fn new(
        writers: IndentingWriterFactory,
        directories: Arc<dyn DirectoryFactory>,
        snapshot: Arc<MetadataSnapshot>,
    ) -> Self {
        Self {
            writers,
            directories,
            snapshot,
        }
    }

    /// Freeze the bindings into an open context.
    pub(crate) fn open(self) -> GenerationContext {
        trace!("generation context opened");
        GenerationContext {
            writers: self.writers,
            directories: self.directories,
            snapshot: self.snapshot,
        }
    }
}

/// The immutable binding set live for one generation attempt.
pub struct GenerationContext {
    pub writers: IndentingWriterFactory,
    pub directories: Arc<dyn DirectoryFactory>,
    pub snapshot: Arc<MetadataSnapshot>,
}

impl Drop for GenerationContext {
    fn drop(&mut self) {
        trace!("generation context closed");
    }
}
