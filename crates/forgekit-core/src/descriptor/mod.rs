//! Descriptor synthesis: render a resolved request into build-descriptor
//! bytes.
//!
//! Both dialects share one render path parameterized by a per-dialect
//! template set. Output is a pure function of `(request, indent strategy)`:
//! identical inputs yield byte-identical descriptors, which downstream
//! tooling relies on for textual assertions and idempotent regeneration.
//! Synthesis never touches the filesystem.

mod templates;

use tracing::instrument;

use crate::application::error::GenerationError;
use crate::domain::{DependencyEntry, ResolvedRequest};
use crate::text::{IndentingWriter, IndentingWriterFactory, TemplateContext};

use templates::{DialectSpec, SectionSpec};

pub(crate) use templates::SKELETON_README;

/// Facet marking a dependency that also declares a build plugin.
const PLUGIN_FACET: &str = "plugin";

/// Render the descriptor for the request's dialect into an in-memory buffer.
///
/// Sections, in order: project coordinates, one dependency block per
/// resolved dependency (resolution order preserved), plugin declarations for
/// dependencies carrying the `plugin` facet, then the dialect's layout
/// block. Empty dependency/plugin sections are omitted entirely.
#[instrument(skip_all, fields(dialect = %request.dialect()))]
pub fn render_descriptor(
    request: &ResolvedRequest,
    writers: &IndentingWriterFactory,
) -> Result<Vec<u8>, GenerationError> {
    let dialect = request.dialect();
    for dep in &request.dependencies {
        if let Some(facet) = dep.facets.iter().find(|f| !dialect.supports_facet(f)) {
            // Resolution already rejects this combination; reaching it here
            // means the request was assembled outside the resolver.
            return Err(GenerationError::Rendering {
                reason: format!(
                    "dependency '{}' carries facet '{}', which the {} dialect cannot express",
                    dep.id, facet, dialect
                ),
            });
        }
    }

    let spec = DialectSpec::for_dialect(dialect);
    let coordinates = TemplateContext::new()
        .with("NAME", &request.name)
        .with("VERSION", &request.version)
        .with("DESCRIPTION", &request.description);
    let plugins: Vec<&DependencyEntry> = request
        .dependencies
        .iter()
        .filter(|d| d.has_facet(PLUGIN_FACET))
        .collect();

    let mut w = writers.writer();
    emit_section(&mut w, &spec.coordinates, &[coordinates.clone()], false);
    emit_section(
        &mut w,
        &spec.dependencies,
        &request
            .dependencies
            .iter()
            .map(|d| dependency_context(d))
            .collect::<Vec<_>>(),
        true,
    );
    emit_section(
        &mut w,
        &spec.plugins,
        &plugins
            .iter()
            .map(|d| dependency_context(d))
            .collect::<Vec<_>>(),
        true,
    );
    emit_section(&mut w, &spec.layout, &[coordinates], false);

    Ok(w.into_bytes())
}

fn dependency_context(dep: &DependencyEntry) -> TemplateContext {
    TemplateContext::new()
        .with("ID", &dep.id)
        .with("GROUP", &dep.group)
        .with("VERSION", dep.version_or_wildcard())
}

/// Emit one section: framing, then the item lines once per item context.
///
/// `skip_when_empty` drops sections whose item list is empty (dependency and
/// plugin sections); coordinate and layout sections always render.
fn emit_section(
    w: &mut IndentingWriter,
    spec: &SectionSpec,
    items: &[TemplateContext],
    skip_when_empty: bool,
) {
    if skip_when_empty && items.is_empty() {
        return;
    }
    if !w.as_str().is_empty() {
        w.blank();
    }
    if !spec.open.is_empty() {
        w.line(spec.open);
    }
    let emit_items = |w: &mut IndentingWriter| {
        for item in items {
            if !spec.item_open.is_empty() {
                w.line(&item.render(spec.item_open));
            }
            let emit_lines = |w: &mut IndentingWriter| {
                for line in spec.item_lines {
                    w.line(&item.render(line));
                }
            };
            if spec.indent_item_body {
                w.indented(emit_lines);
            } else {
                emit_lines(w);
            }
            if !spec.item_close.is_empty() {
                w.line(&item.render(spec.item_close));
            }
        }
    };
    if spec.indent_body {
        w.indented(emit_items);
    } else {
        emit_items(w);
    }
    if !spec.close.is_empty() {
        w.line(spec.close);
    }
}
