//! Application-layer errors: failures during synthesis and materialization.
//!
//! Every variant is `Clone + PartialEq` and serializable, because a failure
//! cause travels inside the outcome event and must compare structurally
//! against the cause the caller expects.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A downstream failure inside an open generation context.
///
/// Always surfaced to the eventing layer as a `Failed` outcome with the
/// original cause attached; never swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum GenerationError {
    /// The directory factory could not allocate a fresh project root.
    #[error("directory allocation failed: {reason}")]
    DirectoryAllocation { reason: String },

    /// Descriptor synthesis failed.
    #[error("descriptor rendering failed: {reason}")]
    Rendering { reason: String },

    /// A filesystem write failed during materialization.
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },
}
