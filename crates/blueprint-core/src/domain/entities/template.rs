//! Blueprint template files and the substitution context used to render them.
//!
//! Template *paths* carry file-map tokens (`__path__`, `__name__`); template
//! *content* carries `{{VARIABLE}}` placeholders filled from [`RenderContext`].
//!
//! ```text
//! __path__/__name__.service.ts   --tokens-->   src/app/user-profile/user-profile.service.ts
//! export class {{CLASSIFIED_MODULE_NAME}}Service   --render-->   export class UserProfileService
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::domain::naming::{camelize, classify, dasherize};

/// One file shipped with a blueprint, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Tokenised path, `/`-separated.
    pub path: String,
    pub content: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `ENTITY_NAME` | "userProfile" | Resolved entity name |
/// | `DASHERIZED_MODULE_NAME` | "user-profile" | Computed |
/// | `CLASSIFIED_MODULE_NAME` | "UserProfile" | Computed |
/// | `CAMELIZED_MODULE_NAME` | "userProfile" | Computed |
#[derive(Debug, Clone)]
pub struct RenderContext {
    entity_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context with the naming variants of `entity_name`.
    pub fn new(entity_name: impl Into<String>) -> Self {
        let name = entity_name.into();
        let mut vars = HashMap::new();

        vars.insert("ENTITY_NAME".to_string(), name.clone());
        vars.insert("DASHERIZED_MODULE_NAME".to_string(), dasherize(&name));
        vars.insert("CLASSIFIED_MODULE_NAME".to_string(), classify(&name));
        vars.insert("CAMELIZED_MODULE_NAME".to_string(), camelize(&name));

        Self {
            entity_name: name,
            variables: vars,
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Replacements for tokens appearing in template file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMapTokens(BTreeMap<String, String>);

impl FileMapTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(token.into(), value.into());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(|s| s.as_str())
    }

    /// Map a tokenised template path to its output path.
    ///
    /// Empty segments produced by an empty token value are dropped, so
    /// `__path__/x.ts` with `__path__ = ""` becomes `x.ts`.
    pub fn map_path(&self, template_path: &str) -> String {
        let mut mapped = template_path.to_string();
        for (token, value) in &self.0 {
            mapped = mapped.replace(token.as_str(), value);
        }
        mapped
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_context_derives_naming_variants() {
        let ctx = RenderContext::new("userProfile");
        assert_eq!(ctx.get("DASHERIZED_MODULE_NAME"), Some("user-profile"));
        assert_eq!(ctx.get("CLASSIFIED_MODULE_NAME"), Some("UserProfile"));
        assert_eq!(ctx.get("CAMELIZED_MODULE_NAME"), Some("userProfile"));
    }

    #[test]
    fn render_replaces_known_and_keeps_unknown() {
        let ctx = RenderContext::new("foo");
        assert_eq!(
            ctx.render("class {{CLASSIFIED_MODULE_NAME}}Service {{UNKNOWN}}"),
            "class FooService {{UNKNOWN}}"
        );
    }

    #[test]
    fn map_path_substitutes_tokens() {
        let tokens = FileMapTokens::new()
            .with("__path__", "src/app/foo")
            .with("__name__", "foo");
        assert_eq!(
            tokens.map_path("__path__/__name__.service.ts"),
            "src/app/foo/foo.service.ts"
        );
    }

    #[test]
    fn map_path_drops_empty_segments() {
        let tokens = FileMapTokens::new()
            .with("__path__", "")
            .with("__name__", "foo");
        assert_eq!(tokens.map_path("__path__/__name__.service.ts"), "foo.service.ts");
    }
}
