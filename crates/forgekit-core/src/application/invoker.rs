//! Generation invoker: runs an action inside a request-scoped context and
//! reports the outcome.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::context::{ContextConfig, GenerationContext};
use crate::application::error::GenerationError;
use crate::application::outcome::GenerationOutcome;
use crate::application::ports::{DirectoryFactory, EventPublisher};
use crate::domain::{MetadataSnapshot, ResolvedRequest};
use crate::text::IndentingWriterFactory;

/// Runs generation actions in isolation and publishes exactly one outcome
/// event per attempt.
///
/// One attempt moves through: context open → action → outcome published →
/// context closed. Both terminal states close the context; an attempt never
/// re-enters resolution once its context is open.
pub struct GenerationInvoker {
    publisher: Arc<dyn EventPublisher>,
    writers: IndentingWriterFactory,
    directories: Arc<dyn DirectoryFactory>,
}

impl GenerationInvoker {
    pub fn new(
        publisher: Arc<dyn EventPublisher>,
        writers: IndentingWriterFactory,
        directories: Arc<dyn DirectoryFactory>,
    ) -> Self {
        Self {
            publisher,
            writers,
            directories,
        }
    }

    /// Execute `action` inside a fresh context for `request`.
    ///
    /// `configurer` may rebind context entries before the context opens
    /// (e.g. substituting a test directory factory). Whether `action`
    /// succeeds or fails, exactly one [`GenerationOutcome`] is published and
    /// the context is dropped before this returns. The action's own result
    /// is handed back to the caller with the cause intact.
    #[instrument(skip_all, fields(request = %request))]
    pub fn run<T>(
        &self,
        request: &ResolvedRequest,
        snapshot: Arc<MetadataSnapshot>,
        configurer: impl FnOnce(&mut ContextConfig),
        action: impl FnOnce(&GenerationContext) -> Result<T, GenerationError>,
    ) -> Result<T, GenerationError> {
        let mut config = ContextConfig::new(
            self.writers.clone(),
            Arc::clone(&self.directories),
            snapshot,
        );
        configurer(&mut config);
        let context = config.open();

        let result = action(&context);
        let outcome = match &result {
            Ok(_) => {
                info!("generation attempt succeeded");
                GenerationOutcome::Generated {
                    request: request.clone(),
                }
            }
            Err(cause) => {
                warn!(%cause, "generation attempt failed");
                GenerationOutcome::Failed {
                    request: request.clone(),
                    cause: cause.clone(),
                }
            }
        };
        self.publisher.publish(outcome);

        drop(context);
        result
    }
}
