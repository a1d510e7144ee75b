//! The outcome event emitted once per generation attempt.

use serde::Serialize;

use crate::application::error::GenerationError;
use crate::domain::ResolvedRequest;

/// Result of one generation attempt that reached an open context.
///
/// Exactly one instance is created per attempt and handed to the event
/// publisher. Equality is structural: subscribers and tests correlate an
/// event with the request that produced it by plain value comparison, not
/// matcher objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated {
        request: ResolvedRequest,
    },
    Failed {
        request: ResolvedRequest,
        cause: GenerationError,
    },
}

impl GenerationOutcome {
    /// The resolved request this attempt was for, on either path.
    pub fn request(&self) -> &ResolvedRequest {
        match self {
            Self::Generated { request } | Self::Failed { request, .. } => request,
        }
    }

    pub fn cause(&self) -> Option<&GenerationError> {
        match self {
            Self::Generated { .. } => None,
            Self::Failed { cause, .. } => Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}
