//! Application state container for the playground editor.
//!
//! This module defines [`AppState`], the single immutable state value of the
//! editor, together with the [`NameModal`] sub-state for the create/rename
//! dialog and the [`TabId`] tab identifier.
//!
//! # Immutability
//!
//! `AppState` is never mutated in place by the application. Each transition in
//! [`crate::app::transitions`] clones the previous value and returns a new
//! one; the [`Store`](crate::app::Store) replaces its held value wholesale.
//! Observers holding a reference to an earlier state therefore never see it
//! change underneath them.
//!
//! # Invariants
//!
//! Every transition preserves:
//!
//! - `tabs` contains no duplicates and is exactly the key set of `partials`,
//!   in display order;
//! - `active_tab` is [`TabId::Template`] or names a member of `tabs`;
//! - `name_modal.error` matches the current `staged_id`/`id` pair whenever
//!   either is settled (never stale).

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Identifier for the document shown in the editor pane.
///
/// A tab is either the main template document or one named partial. The
/// template tab always exists; partial tabs come and go with the entries of
/// [`AppState::partials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabId {
    /// The main template document.
    Template,
    /// The partial with the given name.
    Partial(String),
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Partial(name) => write!(f, "{name}"),
        }
    }
}

/// Validation failure for a staged partial name.
///
/// Carried as data in [`NameModal::error`] and surfaced inline next to the
/// name input; never raised. The `Display` strings are the exact user-facing
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The staged name is empty after trimming.
    #[error("Name is required")]
    Required,

    /// The trimmed staged name collides with an existing partial
    /// (self-rename to the same name is exempt).
    #[error("Name already in use")]
    AlreadyInUse,

    /// The staged name contains whitespace (checked untrimmed).
    #[error("Name may not have spaces")]
    HasSpaces,
}

/// Sub-state of the create/rename dialog.
///
/// `id` distinguishes the two active shapes: `None` while creating a new
/// partial, `Some(name)` while renaming an existing one. `staged_id` holds
/// the user-edited candidate name until submission succeeds; `error` is the
/// live validation result for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameModal {
    /// `None` for create, `Some(name)` for rename of `name`.
    pub id: Option<String>,
    /// Whether the dialog is open.
    pub is_active: bool,
    /// Candidate name, not yet committed.
    pub staged_id: String,
    /// Current validation message for `staged_id`, if any.
    pub error: Option<NameError>,
}

impl NameModal {
    /// The inactive dialog: closed, nothing staged, no error.
    ///
    /// The modal is reset to this value whenever the dialog is cancelled, a
    /// partial is submitted, or a partial is deleted.
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            id: None,
            is_active: false,
            staged_id: String::new(),
            error: None,
        }
    }
}

impl Default for NameModal {
    fn default() -> Self {
        Self::inactive()
    }
}

/// The single application-state value of the playground editor.
///
/// Holds the template and data documents, the named partials with their
/// display order, the active tab, the dialog sub-state, and the preview
/// toggle. Created once at startup (see [`AppState::default`]) and replaced
/// wholesale by each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Tab currently shown for editing.
    pub active_tab: TabId,

    /// Source text of the main template document.
    pub template: String,

    /// Source text of the JSON data document, kept unparsed.
    ///
    /// Validity of the JSON is not the state's concern; the preview pipeline
    /// parses it on demand and surfaces failures downstream.
    pub data: String,

    /// All named partial templates, keyed by name.
    pub partials: BTreeMap<String, String>,

    /// Display order of partial tabs.
    ///
    /// Exactly the key set of `partials`, duplicate free.
    pub tabs: Vec<String>,

    /// Sub-state of the create/rename dialog.
    pub name_modal: NameModal,

    /// Whether the preview pane shows rendered output or raw text.
    pub is_preview: bool,
}

impl Default for AppState {
    /// The startup state: a greeting template with matching JSON data, no
    /// partials, an inactive dialog, and the preview on.
    fn default() -> Self {
        Self {
            active_tab: TabId::Template,
            template: "<h1> Hello {{ labels.msg }} ! </h1>".to_string(),
            data: r#"{ "labels": { "msg": "World" } }"#.to_string(),
            partials: BTreeMap::new(),
            tabs: Vec::new(),
            name_modal: NameModal::inactive(),
            is_preview: true,
        }
    }
}

impl AppState {
    /// Returns the source text of the document behind the active tab.
    ///
    /// Falls back to the template text if the active tab names a partial that
    /// no longer exists; that state is unreachable while the invariants hold.
    #[must_use]
    pub fn active_text(&self) -> &str {
        match &self.active_tab {
            TabId::Template => &self.template,
            TabId::Partial(name) => self
                .partials
                .get(name)
                .map_or(self.template.as_str(), String::as_str),
        }
    }

    /// Checks the structural invariants tying `tabs`, `partials`, and
    /// `active_tab` together.
    ///
    /// Used by tests; transitions are written to keep this true and never
    /// consult it at runtime.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let no_duplicates = self
            .tabs
            .iter()
            .all(|name| self.tabs.iter().filter(|t| *t == name).count() == 1);
        let tabs_match_partials = self.tabs.len() == self.partials.len()
            && self.tabs.iter().all(|name| self.partials.contains_key(name));
        let active_known = match &self.active_tab {
            TabId::Template => true,
            TabId::Partial(name) => self.tabs.contains(name),
        };
        no_duplicates && tabs_match_partials && active_known
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_is_consistent() {
        let state = AppState::default();
        assert!(state.is_consistent());
        assert_eq!(state.active_tab, TabId::Template);
        assert!(state.partials.is_empty());
        assert!(state.tabs.is_empty());
        assert!(!state.name_modal.is_active);
        assert!(state.is_preview);
    }

    #[test]
    fn active_text_follows_the_active_tab() {
        let mut state = AppState::default();
        state
            .partials
            .insert("greeting".to_string(), "hi".to_string());
        state.tabs.push("greeting".to_string());

        assert_eq!(state.active_text(), state.template.as_str());

        state.active_tab = TabId::Partial("greeting".to_string());
        assert_eq!(state.active_text(), "hi");
    }

    #[test]
    fn name_error_messages_are_the_user_facing_strings() {
        assert_eq!(NameError::Required.to_string(), "Name is required");
        assert_eq!(NameError::AlreadyInUse.to_string(), "Name already in use");
        assert_eq!(NameError::HasSpaces.to_string(), "Name may not have spaces");
    }

    #[test]
    fn is_consistent_flags_drift() {
        let mut state = AppState::default();
        state.tabs.push("ghost".to_string());
        assert!(!state.is_consistent());

        let mut state = AppState::default();
        state.active_tab = TabId::Partial("ghost".to_string());
        assert!(!state.is_consistent());
    }
}
