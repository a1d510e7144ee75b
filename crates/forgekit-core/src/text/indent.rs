//! Depth-tracking writers for structured text emission.
//!
//! Synthesizers emit descriptor text through an [`IndentingWriter`] so nested
//! blocks are consistently indented per the configured [`IndentStrategy`].
//! Output is accumulated in memory; nothing here touches the filesystem.

use std::fmt;

/// The literal string written once per nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStrategy(String);

impl IndentStrategy {
    pub fn of(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    pub fn spaces(count: usize) -> Self {
        Self(" ".repeat(count))
    }

    pub fn tabs() -> Self {
        Self("\t".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IndentStrategy {
    fn default() -> Self {
        Self::spaces(4)
    }
}

/// Produces writers bound to one indent strategy.
///
/// One factory is bound per generation context; cloning it is cheap and
/// every writer it yields starts at depth zero.
#[derive(Debug, Clone, Default)]
pub struct IndentingWriterFactory {
    strategy: IndentStrategy,
}

impl IndentingWriterFactory {
    pub fn new(strategy: IndentStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &IndentStrategy {
        &self.strategy
    }

    pub fn writer(&self) -> IndentingWriter {
        IndentingWriter {
            indent: self.strategy.0.clone(),
            depth: 0,
            out: String::new(),
        }
    }
}

/// A line-oriented writer that prefixes every non-empty line with
/// `depth × indent`.
#[derive(Debug)]
pub struct IndentingWriter {
    indent: String,
    depth: usize,
    out: String,
}

impl IndentingWriter {
    /// Write one line at the current depth.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(&self.indent);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Write an empty line (never indented).
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Run `body` one level deeper; the matching decrease is implicit.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent();
        body(self);
        self.outdent();
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease the nesting depth.
    ///
    /// # Panics
    ///
    /// Panics when the depth is already zero. An unbalanced decrease is a
    /// synthesis bug, not a recoverable condition.
    pub fn outdent(&mut self) {
        assert!(self.depth > 0, "indent depth underflow: outdent past zero");
        self.depth -= 1;
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }
}

impl fmt::Display for IndentingWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_prefixed_per_depth() {
        let factory = IndentingWriterFactory::new(IndentStrategy::tabs());
        let mut w = factory.writer();
        w.line("outer {");
        w.indented(|w| {
            w.line("inner {");
            w.indented(|w| w.line("leaf"));
            w.line("}");
        });
        w.line("}");

        assert_eq!(w.as_str(), "outer {\n\tinner {\n\t\tleaf\n\t}\n}\n");
    }

    #[test]
    fn empty_lines_carry_no_indent() {
        let factory = IndentingWriterFactory::new(IndentStrategy::spaces(2));
        let mut w = factory.writer();
        w.indented(|w| {
            w.line("a");
            w.blank();
            w.line("");
            w.line("b");
        });
        assert_eq!(w.as_str(), "  a\n\n\n  b\n");
    }

    #[test]
    fn scoped_blocks_restore_depth() {
        let mut w = IndentingWriterFactory::default().writer();
        w.indented(|w| assert_eq!(w.depth(), 1));
        assert_eq!(w.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "indent depth underflow")]
    fn outdent_past_zero_panics() {
        let mut w = IndentingWriterFactory::default().writer();
        w.outdent();
    }
}
