//! Application layer for Forgekit.
//!
//! This layer contains:
//! - **Services**: the generator facade, invoker, and materializer
//! - **Ports**: interface definitions (traits) for external collaborators
//! - **Errors/Outcomes**: generation failures and the per-attempt outcome
//!
//! The application layer coordinates the domain layer but contains no
//! resolution logic itself; that lives in `crate::domain::resolver`.

pub mod context;
pub mod error;
pub mod generator;
pub mod invoker;
pub mod materializer;
pub mod outcome;
pub mod ports;

pub use context::{ContextConfig, GenerationContext};
pub use error::GenerationError;
pub use generator::{GeneratorBuilder, ProjectGenerator};
pub use invoker::GenerationInvoker;
pub use materializer::ProjectMaterializer;
pub use outcome::GenerationOutcome;
pub use ports::{DirectoryFactory, EventPublisher, Filesystem, MetadataProvider};
