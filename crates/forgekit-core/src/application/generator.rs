//! Project generator facade - the engine's main entry points.
//!
//! Each entry point follows the same control flow: take the current
//! metadata snapshot, resolve the raw request (a resolver error aborts here,
//! before any context opens, so no outcome event is emitted), then run the
//! matching action through the [`GenerationInvoker`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::invoker::GenerationInvoker;
use crate::application::materializer::ProjectMaterializer;
use crate::application::ports::{DirectoryFactory, EventPublisher, Filesystem, MetadataProvider};
use crate::descriptor::render_descriptor;
use crate::domain::{Dialect, ProjectType, RawRequest, resolve};
use crate::error::{ForgekitError, ForgekitResult};
use crate::text::IndentingWriterFactory;

/// Main generation service.
pub struct ProjectGenerator {
    provider: Arc<dyn MetadataProvider>,
    invoker: GenerationInvoker,
    materializer: ProjectMaterializer,
}

impl ProjectGenerator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    /// Render the manifest-dialect descriptor for `raw`.
    ///
    /// Forces the request's project type to `manifest-build`; the rest of
    /// the request is resolved as supplied.
    pub fn generate_manifest(&self, raw: RawRequest) -> ForgekitResult<Vec<u8>> {
        self.generate_descriptor(raw, Dialect::Manifest)
    }

    /// Render the buildfile-dialect descriptor for `raw`.
    pub fn generate_buildfile(&self, raw: RawRequest) -> ForgekitResult<Vec<u8>> {
        self.generate_descriptor(raw, Dialect::Buildfile)
    }

    #[instrument(skip_all, fields(dialect = %dialect))]
    fn generate_descriptor(
        &self,
        mut raw: RawRequest,
        dialect: Dialect,
    ) -> ForgekitResult<Vec<u8>> {
        raw.project_type = ProjectType::Descriptor(dialect).as_str().to_string();
        let snapshot = self.provider.snapshot();
        let request = resolve(raw, &snapshot)?;
        let bytes = self.invoker.run(&request, snapshot, |_| {}, |context| {
            render_descriptor(&request, &context.writers)
        })?;
        Ok(bytes)
    }

    /// Materialize a full project tree for `raw` and return its root.
    #[instrument(skip_all)]
    pub fn generate_project(&self, raw: RawRequest) -> ForgekitResult<PathBuf> {
        let snapshot = self.provider.snapshot();
        let request = resolve(raw, &snapshot)?;
        info!(request = %request, "request resolved");
        let root = self.invoker.run(&request, snapshot, |_| {}, |context| {
            self.materializer.materialize(&request, context)
        })?;
        Ok(root)
    }

    /// The underlying invoker, for callers that need a custom configurer
    /// or action (tests substituting a directory factory, for instance).
    pub fn invoker(&self) -> &GenerationInvoker {
        &self.invoker
    }

    /// Current snapshot from the configured metadata provider.
    pub fn snapshot(&self) -> Arc<crate::domain::MetadataSnapshot> {
        self.provider.snapshot()
    }
}

/// Builder wiring the generator's collaborators.
#[derive(Default)]
pub struct GeneratorBuilder {
    provider: Option<Arc<dyn MetadataProvider>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    directories: Option<Arc<dyn DirectoryFactory>>,
    filesystem: Option<Box<dyn Filesystem>>,
    writers: IndentingWriterFactory,
}

impl GeneratorBuilder {
    pub fn metadata_provider(mut self, provider: Arc<dyn MetadataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn event_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn directory_factory(mut self, directories: Arc<dyn DirectoryFactory>) -> Self {
        self.directories = Some(directories);
        self
    }

    pub fn filesystem(mut self, filesystem: Box<dyn Filesystem>) -> Self {
        self.filesystem = Some(filesystem);
        self
    }

    pub fn indenting_writers(mut self, writers: IndentingWriterFactory) -> Self {
        self.writers = writers;
        self
    }

    pub fn build(self) -> ForgekitResult<ProjectGenerator> {
        let provider = self.provider.ok_or_else(|| not_configured("metadata provider"))?;
        let publisher = self.publisher.ok_or_else(|| not_configured("event publisher"))?;
        let directories = self
            .directories
            .ok_or_else(|| not_configured("directory factory"))?;
        let filesystem = self.filesystem.ok_or_else(|| not_configured("filesystem"))?;

        Ok(ProjectGenerator {
            provider,
            invoker: GenerationInvoker::new(publisher, self.writers, directories),
            materializer: ProjectMaterializer::new(filesystem),
        })
    }
}

fn not_configured(name: &str) -> ForgekitError {
    ForgekitError::Configuration {
        message: format!("{name} not configured"),
    }
}
