//! Startup document sets loaded from a TOML workspace file.
//!
//! The editor demo can be pointed at a TOML file supplying the initial
//! template, data document, and partials. The file is read once at startup
//! and turned into the initial [`AppState`]; live state is never written
//! back; the playground holds everything in memory for the process
//! lifetime.
//!
//! # Format
//!
//! ```toml
//! template = "<h1>{{ title }}</h1> {{> footer }}"
//! data = '{ "title": "Hi" }'
//!
//! [partials]
//! footer = "<footer>bye</footer>"
//! ```
//!
//! Missing keys fall back to the startup defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::AppState;
use crate::domain::{PlaygroundError, Result};

/// Parsed contents of a workspace file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceFile {
    /// Main template text; default startup template when absent.
    pub template: Option<String>,

    /// JSON data document text; default startup data when absent.
    pub data: Option<String>,

    /// Named partials. Tab order follows the name order of the map.
    #[serde(default)]
    pub partials: BTreeMap<String, String>,
}

impl WorkspaceFile {
    /// Reads and parses a workspace file.
    ///
    /// # Errors
    ///
    /// Returns [`PlaygroundError::Io`] when the file cannot be read and
    /// [`PlaygroundError::Workspace`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading workspace file");
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| PlaygroundError::Workspace(e.to_string()))
    }

    /// Builds the initial application state from this document set.
    ///
    /// The result upholds the state invariants by construction: the tab list
    /// is derived from the partial map itself.
    #[must_use]
    pub fn into_state(self) -> AppState {
        let mut state = AppState::default();
        if let Some(template) = self.template {
            state.template = template;
        }
        if let Some(data) = self.data {
            state.data = data;
        }
        state.tabs = self.partials.keys().cloned().collect();
        state.partials = self.partials;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_workspace(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_documents_into_a_consistent_state() {
        let file = write_workspace(
            r#"
template = "Hello {{> who }}!"
data = '{ "name": "World" }'

[partials]
who = "{{ name }}"
"#,
        );

        let state = WorkspaceFile::load(file.path()).unwrap().into_state();
        assert_eq!(state.template, "Hello {{> who }}!");
        assert_eq!(state.data, r#"{ "name": "World" }"#);
        assert_eq!(state.tabs, vec!["who".to_string()]);
        assert_eq!(state.partials["who"], "{{ name }}");
        assert!(state.is_consistent());
    }

    #[test]
    fn missing_keys_fall_back_to_the_startup_defaults() {
        let file = write_workspace("");
        let state = WorkspaceFile::load(file.path()).unwrap().into_state();
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn invalid_toml_is_a_workspace_error() {
        let file = write_workspace("template = [broken");
        let err = WorkspaceFile::load(file.path()).unwrap_err();
        assert!(matches!(err, PlaygroundError::Workspace(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = WorkspaceFile::load(Path::new("/nonexistent/workspace.toml")).unwrap_err();
        assert!(matches!(err, PlaygroundError::Io(_)));
    }
}
