//! Request resolution: the pure function at the heart of the engine.
//!
//! `resolve` is a function of exactly two inputs, the raw request and one
//! metadata snapshot, and performs no I/O, which keeps it independently
//! testable without the materializer or invoker.

use std::collections::BTreeSet;

use crate::domain::catalog::{DependencyEntry, MetadataSnapshot};
use crate::domain::error::ResolveError;
use crate::domain::request::{ProjectType, RawRequest, ResolvedRequest};

const DEFAULT_NAME: &str = "demo";
const DEFAULT_VERSION: &str = "0.1.0";

/// Resolve a raw request against a metadata snapshot.
///
/// Resolution order:
/// 1. look up every requested identifier, preserving the caller's ordering;
/// 2. deduplicate by identifier, keeping the first occurrence's position;
/// 3. apply catalog-declared defaults only when the caller requested none;
/// 4. validate the project type against the known dialects;
/// 5. reject facets the chosen dialect cannot express;
/// 6. fill naming defaults.
///
/// Unknown identifiers are a hard failure: no partial resolution is ever
/// returned.
pub fn resolve(
    raw: RawRequest,
    snapshot: &MetadataSnapshot,
) -> Result<ResolvedRequest, ResolveError> {
    let mut seen = BTreeSet::new();
    let mut dependencies: Vec<DependencyEntry> = Vec::new();

    for id in &raw.dependencies {
        let entry = lookup(snapshot, id)?;
        if seen.insert(entry.id.clone()) {
            dependencies.push(entry.clone());
        }
    }

    if raw.dependencies.is_empty() {
        for id in snapshot.default_dependencies() {
            let entry = lookup(snapshot, id)?;
            if seen.insert(entry.id.clone()) {
                dependencies.push(entry.clone());
            }
        }
    }

    let project_type = ProjectType::parse(&raw.project_type)?;

    let dialect = project_type.dialect();
    for dep in &dependencies {
        if let Some(facet) = dep.facets.iter().find(|f| !dialect.supports_facet(f)) {
            return Err(ResolveError::IncompatibleRequest {
                reason: format!(
                    "dependency '{}' carries facet '{}', which the {} dialect cannot express",
                    dep.id, facet, dialect
                ),
            });
        }
    }

    Ok(ResolvedRequest {
        name: non_empty_or(raw.name, DEFAULT_NAME),
        version: non_empty_or(raw.version, DEFAULT_VERSION),
        description: raw.description,
        project_type,
        dependencies,
    })
}

fn lookup<'a>(
    snapshot: &'a MetadataSnapshot,
    id: &str,
) -> Result<&'a DependencyEntry, ResolveError> {
    snapshot
        .dependency(id)
        .ok_or_else(|| ResolveError::UnresolvableDependency { id: id.to_string() })
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
