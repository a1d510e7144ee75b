//! Plain `{{VARIABLE}}` substitution.
//!
//! This is the black-box text templating service the synthesizers fill their
//! dialect templates with. Unknown placeholders are left verbatim so a
//! malformed template is visible in the output rather than silently eaten.

use std::collections::HashMap;

/// Variable map applied to template strings.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` placeholder with its bound value.
    ///
    /// One left-to-right pass over the template. Substituted values are
    /// never re-scanned, so placeholder syntax inside a bound value comes
    /// through literally and the output does not depend on map order.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let tail = &rest[start + 2..];
            match tail.find("}}") {
                Some(end) => {
                    match self.variables.get(&tail[..end]) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&rest[start..start + end + 4]),
                    }
                    rest = &tail[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = tail;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_bound_variables() {
        let ctx = TemplateContext::new()
            .with("NAME", "demo")
            .with("VERSION", "0.1.0");
        assert_eq!(
            ctx.render("name = \"{{NAME}}\" # {{VERSION}}"),
            "name = \"demo\" # 0.1.0"
        );
    }

    #[test]
    fn unknown_placeholders_stay_verbatim() {
        let ctx = TemplateContext::new().with("NAME", "demo");
        assert_eq!(ctx.render("{{NAME}} {{MISSING}}"), "demo {{MISSING}}");
    }

    #[test]
    fn repeated_placeholders_all_substitute() {
        let ctx = TemplateContext::new().with("X", "1");
        assert_eq!(ctx.render("{{X}}{{X}}"), "11");
    }

    #[test]
    fn bound_values_are_not_reinterpreted_as_templates() {
        let ctx = TemplateContext::new()
            .with("NAME", "demo")
            .with("DESCRIPTION", "{{NAME}} rocks");
        assert_eq!(ctx.render("{{DESCRIPTION}}"), "{{NAME}} rocks");
        assert_eq!(ctx.render("{{NAME}}: {{DESCRIPTION}}"), "demo: {{NAME}} rocks");
    }

    #[test]
    fn unterminated_placeholder_stays_verbatim() {
        let ctx = TemplateContext::new().with("NAME", "demo");
        assert_eq!(ctx.render("{{NAME}} {{oops"), "demo {{oops");
    }
}
