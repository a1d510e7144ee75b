//! Dependency catalog: entries, groups, and the immutable metadata snapshot.
//!
//! A [`MetadataSnapshot`] is a fully-loaded catalog valid for the duration of
//! one request's resolution. The engine never mutates it; providers replace
//! whole snapshots atomically between requests (see the `MetadataProvider`
//! port). Resolution holds only borrowed references into the snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single catalog entry: one dependency the engine may resolve against.
///
/// Immutable once loaded. Facets are capability tags (e.g. `web`) used for
/// dialect-compatibility checks during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub id: String,
    pub group: String,
    #[serde(default)]
    pub facets: BTreeSet<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl DependencyEntry {
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            facets: BTreeSet::new(),
            version: None,
        }
    }

    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.facets.insert(facet.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn has_facet(&self, facet: &str) -> bool {
        self.facets.contains(facet)
    }

    /// Version to render into descriptors; `*` when the catalog declares none.
    pub fn version_or_wildcard(&self) -> &str {
        self.version.as_deref().unwrap_or("*")
    }
}

/// A named grouping of catalog entries, preserving catalog declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGroup {
    pub name: String,
    pub entries: Vec<DependencyEntry>,
}

/// Error raised while assembling a snapshot from catalog data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("dependency id '{id}' declared more than once in the catalog")]
    DuplicateDependency { id: String },

    #[error("default dependency '{id}' is not declared in any group")]
    UnknownDefault { id: String },
}

/// An immutable, internally consistent catalog instance.
///
/// Shared across concurrent attempts behind an `Arc`; read-only for the
/// duration of a request. Lookups scan groups in declaration order, which is
/// adequate for catalog sizes in the tens of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    groups: Vec<DependencyGroup>,
    defaults: Vec<String>,
}

impl MetadataSnapshot {
    pub fn builder() -> MetadataSnapshotBuilder {
        MetadataSnapshotBuilder::default()
    }

    /// Look up a dependency entry by identifier.
    pub fn dependency(&self, id: &str) -> Option<&DependencyEntry> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .find(|e| e.id == id)
    }

    /// Catalog-declared default dependency ids, applied when a request
    /// names no dependencies at all.
    pub fn default_dependencies(&self) -> &[String] {
        &self.defaults
    }

    pub fn groups(&self) -> &[DependencyGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.entries.is_empty())
    }
}

/// Builder assembling a validated [`MetadataSnapshot`].
#[derive(Debug, Default)]
pub struct MetadataSnapshotBuilder {
    groups: Vec<DependencyGroup>,
    defaults: Vec<String>,
}

impl MetadataSnapshotBuilder {
    /// Add a dependency group, preserving insertion order.
    pub fn group(
        mut self,
        name: impl Into<String>,
        entries: impl IntoIterator<Item = DependencyEntry>,
    ) -> Self {
        self.groups.push(DependencyGroup {
            name: name.into(),
            entries: entries.into_iter().collect(),
        });
        self
    }

    /// Declare a default dependency id for requests that name none.
    pub fn default_dependency(mut self, id: impl Into<String>) -> Self {
        self.defaults.push(id.into());
        self
    }

    /// Validate and build the snapshot.
    ///
    /// Invariants: every id is unique across all groups, and every default
    /// id refers to a declared entry.
    pub fn build(self) -> Result<MetadataSnapshot, CatalogError> {
        let mut seen = BTreeSet::new();
        for entry in self.groups.iter().flat_map(|g| g.entries.iter()) {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateDependency {
                    id: entry.id.clone(),
                });
            }
        }
        for id in &self.defaults {
            if !seen.contains(id.as_str()) {
                return Err(CatalogError::UnknownDefault { id: id.clone() });
            }
        }
        Ok(MetadataSnapshot {
            groups: self.groups,
            defaults: self.defaults,
        })
    }
}
