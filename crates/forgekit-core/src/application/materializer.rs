//! Project materialization: descriptor plus conventional skeleton on disk.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::application::context::GenerationContext;
use crate::application::error::GenerationError;
use crate::application::ports::Filesystem;
use crate::descriptor;
use crate::domain::ResolvedRequest;
use crate::text::TemplateContext;

/// Directories every generated project gets, relative to its root.
const SKELETON_DIRS: [&str; 3] = ["src", "src/resources", "tests"];

/// Orchestrates full-project generation inside an open context.
///
/// Partial-failure policy: when a step fails after the root directory was
/// allocated, the directory is left on disk as-is. There is no rollback;
/// cleanup is the caller's responsibility. This is a documented limitation,
/// not masked behaviour.
pub struct ProjectMaterializer {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectMaterializer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize the project for `request` and return its root directory.
    ///
    /// Steps: allocate a fresh root via the context's directory factory,
    /// write the dialect descriptor at its conventional path, write the
    /// skeleton (source roots, resource roots, templated README), return
    /// the root. Any step failure wraps as [`GenerationError`] with the
    /// original cause preserved.
    #[instrument(skip_all, fields(project = %request.name, dialect = %request.dialect()))]
    pub fn materialize(
        &self,
        request: &ResolvedRequest,
        context: &GenerationContext,
    ) -> Result<PathBuf, GenerationError> {
        let root = context.directories.allocate(request)?;
        info!(root = %root.display(), "project root allocated");

        let descriptor = descriptor::render_descriptor(request, &context.writers)?;
        let dialect = request.dialect();
        self.filesystem
            .write_file(&root.join(dialect.descriptor_path()), &descriptor)?;

        for dir in SKELETON_DIRS {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }
        let readme = TemplateContext::new()
            .with("NAME", &request.name)
            .with("DESCRIPTION", &request.description)
            .with("DESCRIPTOR", dialect.descriptor_path())
            .render(descriptor::SKELETON_README);
        self.filesystem
            .write_file(&root.join("README.md"), readme.as_bytes())?;

        info!("project skeleton written");
        Ok(root)
    }
}
