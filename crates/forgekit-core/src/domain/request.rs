//! Generation requests: the raw boundary form and its resolved counterpart.
//!
//! A [`RawRequest`] arrives from the system boundary (an HTTP front end or
//! CLI, both external collaborators) and is consumed exactly once by
//! [`crate::domain::resolver::resolve`]. The [`ResolvedRequest`] it produces
//! is immutable, structurally comparable, and flows by reference through
//! every downstream stage, which lets the eventing layer correlate an
//! emitted outcome with the request that produced it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::DependencyEntry;
use crate::domain::error::ResolveError;

/// A supported build-descriptor output grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Declarative TOML-style manifest (`project.toml`).
    Manifest,
    /// Braced build-script grammar (`project.build`).
    Buildfile,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Manifest, Dialect::Buildfile];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Buildfile => "buildfile",
        }
    }

    /// Conventional path of the descriptor inside a generated project root.
    pub const fn descriptor_path(&self) -> &'static str {
        match self {
            Self::Manifest => "project.toml",
            Self::Buildfile => "project.build",
        }
    }

    /// Whether this dialect can express a dependency facet.
    ///
    /// The manifest dialect is purely declarative: dependencies carrying the
    /// `scripted` facet need imperative build configuration that only the
    /// buildfile grammar has.
    pub fn supports_facet(&self, facet: &str) -> bool {
        match self {
            Self::Manifest => facet != "scripted",
            Self::Buildfile => true,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manifest" => Ok(Self::Manifest),
            "buildfile" => Ok(Self::Buildfile),
            other => Err(ResolveError::UnknownProjectType {
                value: other.to_string(),
            }),
        }
    }
}

/// What the caller asked the engine to produce.
///
/// Selector strings follow `<dialect>-<mode>`: `manifest-build`,
/// `buildfile-build` (descriptor only) and `manifest-project`,
/// `buildfile-project` (full project tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// Render a single descriptor in the given dialect.
    Descriptor(Dialect),
    /// Materialize a full project tree, descriptor included.
    FullProject(Dialect),
}

impl ProjectType {
    pub fn parse(value: &str) -> Result<Self, ResolveError> {
        let unknown = || ResolveError::UnknownProjectType {
            value: value.to_string(),
        };
        let (dialect, mode) = value.rsplit_once('-').ok_or_else(unknown)?;
        let dialect = Dialect::from_str(dialect).map_err(|_| unknown())?;
        match mode {
            "build" => Ok(Self::Descriptor(dialect)),
            "project" => Ok(Self::FullProject(dialect)),
            _ => Err(unknown()),
        }
    }

    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::Descriptor(d) | Self::FullProject(d) => *d,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Descriptor(Dialect::Manifest) => "manifest-build",
            Self::Descriptor(Dialect::Buildfile) => "buildfile-build",
            Self::FullProject(Dialect::Manifest) => "manifest-project",
            Self::FullProject(Dialect::Buildfile) => "buildfile-project",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProjectType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A user-supplied generation request, exactly as it crossed the boundary.
///
/// Dependency identifiers keep the caller's ordering; duplicates are allowed
/// and collapse to the first occurrence during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl RawRequest {
    pub fn new(project_type: impl Into<String>) -> Self {
        Self {
            project_type: project_type.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }
}

/// A request after every identifier has been validated against the catalog
/// and defaults have been applied.
///
/// Immutable after resolution. Equality is structural so outcome events can
/// be matched against the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub project_type: ProjectType,
    pub dependencies: Vec<DependencyEntry>,
}

impl ResolvedRequest {
    pub const fn dialect(&self) -> Dialect {
        self.project_type.dialect()
    }
}

impl fmt::Display for ResolvedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.project_type)
    }
}
