//! The external rendering-engine boundary.
//!
//! The playground never implements template rendering itself. It consumes an
//! engine through the [`Engine`] trait: template text in, parsed data value
//! in, partial lookup in, rendered string out. Template syntax, escaping
//! rules, and rendering semantics all belong to the engine behind the trait.
//!
//! [`HandlebarsEngine`] is the adapter the demos use, backed by the
//! `handlebars` registry crate (Mustache-style syntax with named partials).

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Failure reported by the engine for a malformed or unrenderable template.
///
/// Engines are opaque, so the payload is their own message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

/// Source of named partial templates.
///
/// `lookup` is the contract the engine renders against. `names` exists
/// because registry-style engines must know the partial set up front; a
/// source with enumerable names loses nothing over a bare lookup function.
pub trait PartialSource {
    /// Returns the source text of the partial named `name`, if any.
    fn lookup(&self, name: &str) -> Option<&str>;

    /// Returns every partial name this source can resolve.
    fn names(&self) -> Vec<&str>;
}

impl PartialSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

/// A template-rendering engine.
///
/// Implementations are external collaborators; the playground only relies on
/// this signature and on errors being reported through [`EngineError`]
/// rather than panics.
pub trait Engine {
    /// Renders `template` against `data`, resolving partial references
    /// through `partials`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] for malformed template syntax or any other
    /// failure the engine chooses to report.
    fn render(
        &self,
        template: &str,
        data: &Value,
        partials: &dyn PartialSource,
    ) -> Result<String, EngineError>;
}

/// Demo engine backed by the `handlebars` registry.
///
/// Builds a fresh registry per call, registers every partial from the
/// source, and renders the template as a one-off string. Stateless and
/// cheap at playground scale.
#[derive(Debug, Default)]
pub struct HandlebarsEngine;

impl Engine for HandlebarsEngine {
    fn render(
        &self,
        template: &str,
        data: &Value,
        partials: &dyn PartialSource,
    ) -> Result<String, EngineError> {
        let mut registry = handlebars::Handlebars::new();

        for name in partials.names() {
            if let Some(body) = partials.lookup(name) {
                registry
                    .register_partial(name, body)
                    .map_err(|e| EngineError(e.to_string()))?;
            }
        }

        registry
            .render_template(template, data)
            .map_err(|e| EngineError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_a_plain_template() {
        let engine = HandlebarsEngine;
        let no_partials: BTreeMap<String, String> = BTreeMap::new();
        let out = engine
            .render("Hello {{ name }}!", &json!({ "name": "World" }), &no_partials)
            .unwrap();
        assert_eq!(out, "Hello World!");
    }

    #[test]
    fn resolves_named_partials() {
        let engine = HandlebarsEngine;
        let mut partials = BTreeMap::new();
        partials.insert("who".to_string(), "{{ name }}".to_string());

        let out = engine
            .render("Hello {{> who }}!", &json!({ "name": "World" }), &partials)
            .unwrap();
        assert_eq!(out, "Hello World!");
    }

    #[test]
    fn malformed_syntax_is_an_engine_error() {
        let engine = HandlebarsEngine;
        let no_partials: BTreeMap<String, String> = BTreeMap::new();
        let result = engine.render("{{#if x}}", &json!({}), &no_partials);
        assert!(result.is_err());
    }

    #[test]
    fn partial_source_over_a_map() {
        let mut partials = BTreeMap::new();
        partials.insert("a".to_string(), "A".to_string());
        partials.insert("b".to_string(), "B".to_string());

        let source: &dyn PartialSource = &partials;
        assert_eq!(source.lookup("a"), Some("A"));
        assert_eq!(source.lookup("missing"), None);
        assert_eq!(source.names(), vec!["a", "b"]);
    }
}
