//! The closed set of named state-transition actions.
//!
//! This module defines [`Action`], the tagged union of every transition the
//! [`Store`](crate::app::Store) can apply. The set is closed and statically
//! enumerable: the presentation layer can only ever dispatch one of these
//! variants, and [`crate::app::transitions::apply`] matches over them
//! exhaustively. There is no dynamic lookup of action names anywhere.

use super::state::TabId;

/// A named state transition with its arguments.
///
/// Dispatching an action through the store applies the matching pure
/// transition to the current state. Every action runs to completion and
/// always produces a next state; domain validation failures are represented
/// as data in the modal sub-state, never as errors or panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the JSON data document. No validation.
    SetDataValue(String),

    /// Replaces the document behind the active tab (template or partial).
    SetTabValue(String),

    /// Switches the active tab. Callers are trusted to pass the template tab
    /// or a name drawn from the tab list.
    SetActiveTab(TabId),

    /// Flips the rich/raw preview toggle.
    TogglePreview,

    /// Opens the name dialog: `None` to create a new partial, `Some(name)` to
    /// rename `name` (pre-filling the staged name).
    OpenNameModal(Option<String>),

    /// Closes the name dialog, discarding the staged name and any error.
    CancelNameModal,

    /// Replaces the staged name and recomputes its validation error.
    SetStagedId(String),

    /// Commits the name dialog: creates or renames the partial if the staged
    /// name validates, otherwise leaves the dialog open showing the error.
    SubmitNameModal,

    /// Removes the partial the dialog is renaming and closes the dialog.
    DeletePartial,
}

impl Action {
    /// Short label for log output.
    ///
    /// Kept separate from `Debug` so span fields stay small even when an
    /// action carries a whole document text.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetDataValue(_) => "SetDataValue",
            Self::SetTabValue(_) => "SetTabValue",
            Self::SetActiveTab(_) => "SetActiveTab",
            Self::TogglePreview => "TogglePreview",
            Self::OpenNameModal(_) => "OpenNameModal",
            Self::CancelNameModal => "CancelNameModal",
            Self::SetStagedId(_) => "SetStagedId",
            Self::SubmitNameModal => "SubmitNameModal",
            Self::DeletePartial => "DeletePartial",
        }
    }
}
