//! Domain layer: catalog model, requests, and pure resolution logic.
//!
//! Nothing in this module performs I/O. The only external dependencies are
//! `thiserror` for error enums and `serde` for boundary data; everything
//! else is std.

pub mod catalog;
pub mod error;
pub mod request;
pub mod resolver;

pub use catalog::{
    CatalogError, DependencyEntry, DependencyGroup, MetadataSnapshot, MetadataSnapshotBuilder,
};
pub use error::ResolveError;
pub use request::{Dialect, ProjectType, RawRequest, ResolvedRequest};
pub use resolver::resolve;
