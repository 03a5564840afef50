//! Mustache playground: a terminal editor demo around an external
//! template-rendering engine.
//!
//! The crate ships two demo binaries and the core that powers the editor:
//!
//! - `mustache-playground`: interactive editor with a live preview, named
//!   partials, and a validation-gated create/rename/delete workflow;
//! - `minimal`: one-shot render of a fixed template/data/partials triple.
//!
//! Rendering itself is an external collaborator consumed through the
//! [`render::Engine`] trait; this crate contains no template syntax or
//! escaping logic.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  Demo binaries (main.rs, bin/minimal.rs)   │  ← input mapping
//! └────────────────────────────────────────────┘
//!            │ Action                 ▲ new AppState
//!            ▼                        │
//! ┌────────────────────────────────────────────┐
//! │  Application layer (app/)                  │  ← store + pure transitions
//! └────────────────────────────────────────────┘
//!            │ AppState
//!     ┌──────┴───────┐
//!     ▼              ▼
//! ┌────────┐   ┌───────────┐
//! │ ui/    │   │ render/   │  ← view model / engine boundary + preview
//! └────────┘   └───────────┘
//! ```
//!
//! The application layer holds exactly one mutable cell, the current
//! [`app::AppState`] inside the [`app::Store`], replaced atomically and
//! sequentially by each dispatched [`app::Action`]. Everything downstream
//! (view model, preview) is a pure re-derivation.
//!
//! # Example
//!
//! ```rust
//! use mustache_playground::app::{Action, Store};
//! use mustache_playground::render::{compute_preview, HandlebarsEngine};
//!
//! let mut store = Store::default();
//! store.dispatch(Action::OpenNameModal(None));
//! store.dispatch(Action::SetStagedId("who".to_string()));
//! store.dispatch(Action::SubmitNameModal);
//!
//! assert_eq!(store.state().tabs, vec!["who".to_string()]);
//! let preview = compute_preview(store.state(), &HandlebarsEngine);
//! assert!(preview.is_ok());
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod render;
pub mod ui;
pub mod workspace;

pub use app::{Action, AppState, NameError, NameModal, Store, TabId};
pub use domain::{PlaygroundError, Result};

use std::path::PathBuf;

/// Process configuration for the editor demo.
///
/// Parsed leniently from command-line arguments; unknown flags are the only
/// hard error so a bare invocation always starts with the built-in
/// documents.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional TOML workspace file supplying the startup documents.
    pub workspace_file: Option<PathBuf>,

    /// Whether the preview starts in rich mode.
    pub preview: bool,

    /// Tracing level when `RUST_LOG` is unset. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_file: None,
            preview: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from command-line arguments (without the program
    /// name).
    ///
    /// Accepted: a single positional workspace-file path, `--raw` to start
    /// with the raw preview, and `--trace-level <level>`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaygroundError::Config`] for unknown flags, a missing
    /// `--trace-level` value, or a second positional argument.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--raw" => config.preview = false,
                "--trace-level" => {
                    let level = args.next().ok_or_else(|| {
                        PlaygroundError::Config("--trace-level needs a value".to_string())
                    })?;
                    config.trace_level = Some(level);
                }
                flag if flag.starts_with("--") => {
                    return Err(PlaygroundError::Config(format!("unknown flag: {flag}")));
                }
                path => {
                    if config.workspace_file.is_some() {
                        return Err(PlaygroundError::Config(
                            "at most one workspace file".to_string(),
                        ));
                    }
                    config.workspace_file = Some(PathBuf::from(path));
                }
            }
        }

        Ok(config)
    }
}

/// Builds the startup state for `config`.
///
/// Loads the workspace file when one is configured, otherwise starts from
/// the built-in documents; the preview toggle follows the configuration.
///
/// # Errors
///
/// Propagates workspace-file loading failures.
pub fn initialize(config: &Config) -> Result<AppState> {
    let mut state = match &config.workspace_file {
        Some(path) => workspace::WorkspaceFile::load(path)?.into_state(),
        None => AppState::default(),
    };
    state.is_preview = config.preview;

    tracing::debug!(
        partial_count = state.partials.len(),
        preview = state.is_preview,
        "initialized application state"
    );
    Ok(state)
}
