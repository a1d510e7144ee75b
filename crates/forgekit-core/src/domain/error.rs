use thiserror::Error;

/// Errors raised while resolving a raw request against a metadata snapshot.
///
/// All variants are recoverable and abort the attempt before any generation
/// context is opened, so no outcome event is emitted for them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The project type selector does not name a known dialect or mode.
    #[error("unknown project type '{value}'")]
    UnknownProjectType { value: String },

    /// A requested dependency identifier is absent from the snapshot.
    ///
    /// Hard failure by policy: unknown identifiers are never silently
    /// dropped, and no partial resolution is returned.
    #[error("dependency '{id}' is not in the catalog")]
    UnresolvableDependency { id: String },

    /// The combination of project type and requested facets is structurally
    /// invalid (e.g. a dialect that cannot express a requested facet).
    #[error("incompatible request: {reason}")]
    IncompatibleRequest { reason: String },
}
