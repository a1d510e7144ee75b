//! Text emission helpers: indenting writers and template substitution.

pub mod context;
pub mod indent;

pub use context::TemplateContext;
pub use indent::{IndentStrategy, IndentingWriter, IndentingWriterFactory};
