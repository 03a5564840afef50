//! Derived preview output.
//!
//! The preview is a pure re-computation over the current [`AppState`]: parse
//! the JSON data document, then hand template, data, and partial lookup to
//! the engine. It is not a transition (it never changes state), and both
//! failure classes are reported to the caller as values for the presentation
//! layer to display. The state is always structurally valid by the time it
//! reaches this pipeline, so failures here are purely about document
//! contents.

use serde_json::Value;
use thiserror::Error;

use crate::app::AppState;
use crate::render::engine::{Engine, EngineError};

/// Why the preview could not be computed.
///
/// JSON errors win over render errors: a template is never rendered against
/// data that failed to parse.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The data document is not valid JSON.
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine rejected the template.
    #[error("template error: {0}")]
    Render(#[from] EngineError),
}

/// Computes the rendered output for `state` using `engine`.
///
/// # Errors
///
/// Returns [`PreviewError::Json`] when the data document fails to parse and
/// [`PreviewError::Render`] when the engine reports a failure.
pub fn compute(state: &AppState, engine: &dyn Engine) -> Result<String, PreviewError> {
    let _span = tracing::debug_span!(
        "preview",
        template_len = state.template.len(),
        partial_count = state.partials.len()
    )
    .entered();

    let context: Value = serde_json::from_str(&state.data)?;
    let output = engine.render(&state.template, &context, &state.partials)?;

    tracing::debug!(output_len = output.len(), "preview computed");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{transitions, AppState};
    use crate::render::engine::{HandlebarsEngine, PartialSource};

    /// Engine stub that records nothing and always succeeds.
    struct EchoEngine;

    impl Engine for EchoEngine {
        fn render(
            &self,
            template: &str,
            _data: &Value,
            _partials: &dyn PartialSource,
        ) -> Result<String, EngineError> {
            Ok(template.to_string())
        }
    }

    #[test]
    fn default_state_renders() {
        let state = AppState::default();
        let out = compute(&state, &HandlebarsEngine).unwrap();
        assert!(out.contains("Hello"));
        assert!(out.contains("World"));
    }

    #[test]
    fn malformed_json_is_classified_before_any_render() {
        let state = transitions::set_data_value(&AppState::default(), "{ nope".to_string());
        // EchoEngine cannot fail, so the only possible error is the JSON one.
        let err = compute(&state, &EchoEngine).unwrap_err();
        assert!(matches!(err, PreviewError::Json(_)));
    }

    #[test]
    fn engine_failures_are_classified_as_render_errors() {
        struct FailingEngine;
        impl Engine for FailingEngine {
            fn render(
                &self,
                _template: &str,
                _data: &Value,
                _partials: &dyn PartialSource,
            ) -> Result<String, EngineError> {
                Err(EngineError("unclosed section".to_string()))
            }
        }

        let err = compute(&AppState::default(), &FailingEngine).unwrap_err();
        assert!(matches!(err, PreviewError::Render(_)));
        assert_eq!(err.to_string(), "template error: unclosed section");
    }

    #[test]
    fn created_partials_are_visible_to_the_engine() {
        let state = AppState::default();
        let state = transitions::open_name_modal(&state, None);
        let state = transitions::set_staged_id(&state, "who".to_string());
        let state = transitions::submit_name_modal(&state);
        let state = transitions::set_tab_value(&state, "{{ labels.msg }}".to_string());
        let state =
            transitions::set_active_tab(&state, crate::app::TabId::Template);
        let state =
            transitions::set_tab_value(&state, "Hello {{> who }}!".to_string());

        let out = compute(&state, &HandlebarsEngine).unwrap();
        assert_eq!(out, "Hello World!");
    }
}
