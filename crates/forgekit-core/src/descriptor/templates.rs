//! Per-dialect template sets.
//!
//! Both dialects render through the same generic path in the parent module;
//! only these tables differ. Placeholders use the `{{VAR}}` grammar of
//! [`crate::text::TemplateContext`]. Per-request variables: `NAME`,
//! `VERSION`, `DESCRIPTION`. Per-dependency variables: `ID`, `GROUP`,
//! `VERSION`.

use crate::domain::Dialect;

/// One renderable section of a descriptor.
///
/// `open`/`close` frame the section (`""` means no framing line). Items are
/// rendered once per element, optionally framed and indented themselves,
/// which covers both flat TOML tables and nested braced blocks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionSpec {
    pub open: &'static str,
    pub close: &'static str,
    pub indent_body: bool,
    pub item_open: &'static str,
    pub item_close: &'static str,
    pub indent_item_body: bool,
    pub item_lines: &'static [&'static str],
}

impl SectionSpec {
    const fn flat(open: &'static str, item_lines: &'static [&'static str]) -> Self {
        Self {
            open,
            close: "",
            indent_body: false,
            item_open: "",
            item_close: "",
            indent_item_body: false,
            item_lines,
        }
    }

    const fn braced(open: &'static str, item_lines: &'static [&'static str]) -> Self {
        Self {
            open,
            close: "}",
            indent_body: true,
            item_open: "",
            item_close: "",
            indent_item_body: false,
            item_lines,
        }
    }
}

/// The full template set for one descriptor dialect.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DialectSpec {
    pub coordinates: SectionSpec,
    pub dependencies: SectionSpec,
    pub plugins: SectionSpec,
    pub layout: SectionSpec,
}

impl DialectSpec {
    pub(crate) const fn for_dialect(dialect: Dialect) -> &'static Self {
        match dialect {
            Dialect::Manifest => &MANIFEST,
            Dialect::Buildfile => &BUILDFILE,
        }
    }
}

/// Declarative TOML-style manifest (`project.toml`).
static MANIFEST: DialectSpec = DialectSpec {
    coordinates: SectionSpec::flat(
        "[project]",
        &[
            "name = \"{{NAME}}\"",
            "version = \"{{VERSION}}\"",
            "description = \"{{DESCRIPTION}}\"",
        ],
    ),
    dependencies: SectionSpec::flat(
        "[dependencies]",
        &["{{ID}} = { group = \"{{GROUP}}\", version = \"{{VERSION}}\" }"],
    ),
    plugins: SectionSpec::flat("[plugins]", &["{{ID}} = \"{{VERSION}}\""]),
    layout: SectionSpec::flat(
        "[layout]",
        &[
            "sources = \"src\"",
            "resources = \"src/resources\"",
            "tests = \"tests\"",
        ],
    ),
};

/// Braced build-script grammar (`project.build`).
static BUILDFILE: DialectSpec = DialectSpec {
    coordinates: SectionSpec::braced(
        "project {",
        &[
            "name \"{{NAME}}\"",
            "version \"{{VERSION}}\"",
            "description \"{{DESCRIPTION}}\"",
        ],
    ),
    dependencies: SectionSpec {
        open: "dependencies {",
        close: "}",
        indent_body: true,
        item_open: "dependency {",
        item_close: "}",
        indent_item_body: true,
        item_lines: &[
            "id \"{{ID}}\"",
            "group \"{{GROUP}}\"",
            "version \"{{VERSION}}\"",
        ],
    },
    plugins: SectionSpec::braced("plugins {", &["apply \"{{ID}}\""]),
    layout: SectionSpec::braced(
        "layout {",
        &[
            "sources \"src\"",
            "resources \"src/resources\"",
            "tests \"tests\"",
        ],
    ),
};

/// Placeholder README written into materialized skeletons.
pub(crate) static SKELETON_README: &str = "\
# {{NAME}}

{{DESCRIPTION}}

Generated project skeleton. Build configuration lives in `{{DESCRIPTOR}}`;
sources go under `src/`, resources under `src/resources/`, tests under
`tests/`.
";
