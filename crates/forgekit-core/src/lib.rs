//! Forgekit Core - project generation engine.
//!
//! This crate resolves declarative generation requests against a dependency
//! catalog and renders them into build descriptors and project skeletons,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │      front end (external collaborator)    │
//! └──────────────────┬───────────────────────┘
//!                    │ RawRequest
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │        ProjectGenerator (facade)          │
//! │  resolve → invoke → synthesize/materialize│
//! └──────────────────┬───────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │          Application Ports (Traits)       │
//! │  (MetadataProvider, DirectoryFactory,     │
//! │   EventPublisher, Filesystem)             │
//! └──────────────────┬───────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │     forgekit-adapters (Infrastructure)    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use forgekit_adapters::{LocalFilesystem, LogPublisher, SwappableMetadataProvider, TempDirFactory};
//! use forgekit_core::prelude::*;
//!
//! let snapshot = MetadataSnapshot::builder()
//!     .group("web", [DependencyEntry::new("web", "web").with_facet("web")])
//!     .build()
//!     .unwrap();
//!
//! let generator = ProjectGenerator::builder()
//!     .metadata_provider(Arc::new(SwappableMetadataProvider::new(snapshot)))
//!     .event_publisher(Arc::new(LogPublisher))
//!     .directory_factory(Arc::new(TempDirFactory::new("/tmp/forgekit")))
//!     .filesystem(Box::new(LocalFilesystem::new()))
//!     .build()
//!     .unwrap();
//!
//! let request = RawRequest::new("manifest-project").named("demo").dependency("web");
//! let root = generator.generate_project(request).unwrap();
//! println!("generated at {}", root.display());
//! ```

// Domain layer (catalog, requests, pure resolution)
pub mod domain;

// Application layer (orchestration, ports, outcomes)
pub mod application;

// Descriptor synthesis (dialect template sets + generic render path)
pub mod descriptor;

// Text emission (indenting writers, template substitution)
pub mod text;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationContext, GenerationError, GenerationInvoker, GenerationOutcome,
        ProjectGenerator, ProjectMaterializer,
        ports::{DirectoryFactory, EventPublisher, Filesystem, MetadataProvider},
    };
    pub use crate::descriptor::render_descriptor;
    pub use crate::domain::{
        DependencyEntry, Dialect, MetadataSnapshot, ProjectType, RawRequest, ResolveError,
        ResolvedRequest, resolve,
    };
    pub use crate::error::{ForgekitError, ForgekitResult};
    pub use crate::text::{IndentStrategy, IndentingWriterFactory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
