//! Unified error handling for Forgekit Core.

use thiserror::Error;

use crate::application::GenerationError;
use crate::domain::ResolveError;

/// Root error type for engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForgekitError {
    /// The raw request could not be resolved against the catalog.
    /// No generation context was opened; no outcome event was emitted.
    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// A failure inside an open generation context. Also carried, with the
    /// same cause, by the `Failed` outcome event of the attempt.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// The engine was wired without a required collaborator.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

/// Convenient result type alias.
pub type ForgekitResult<T> = Result<T, ForgekitError>;
