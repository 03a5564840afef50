//! Pure state-transition functions.
//!
//! Each transition computes a new [`AppState`] from the previous one plus its
//! arguments. None of them mutates a shared value: the previous state is
//! cloned and the clone is adjusted, so references to earlier states stay
//! valid (the state tree is small enough that a plain copy beats structural
//! sharing in clarity).
//!
//! All transitions are total. Domain validation failures land in
//! [`NameModal::error`]; structurally odd inputs (a rename id that no longer
//! exists, a dangling active tab) degrade to no-ops instead of panicking.
//!
//! [`apply`] is the single dispatch point mapping an [`Action`] onto its
//! transition; the match is exhaustive, so adding a variant without a
//! transition fails to compile.

use super::actions::Action;
use super::state::{AppState, NameError, NameModal, TabId};
use std::collections::BTreeMap;

/// Body text given to a freshly created partial.
pub const DEFAULT_PARTIAL_BODY: &str = "{{! Empty Partial }}";

/// Applies `action` to `state`, returning the next state.
pub fn apply(state: &AppState, action: Action) -> AppState {
    let _span = tracing::debug_span!("transition", action = action.name()).entered();

    match action {
        Action::SetDataValue(value) => set_data_value(state, value),
        Action::SetTabValue(value) => set_tab_value(state, value),
        Action::SetActiveTab(id) => set_active_tab(state, id),
        Action::TogglePreview => toggle_preview(state),
        Action::OpenNameModal(id) => open_name_modal(state, id),
        Action::CancelNameModal => cancel_name_modal(state),
        Action::SetStagedId(staged_id) => set_staged_id(state, staged_id),
        Action::SubmitNameModal => submit_name_modal(state),
        Action::DeletePartial => delete_partial(state),
    }
}

/// Replaces the JSON data document with `value`, unvalidated.
#[must_use]
pub fn set_data_value(state: &AppState, value: String) -> AppState {
    let mut next = state.clone();
    next.data = value;
    next
}

/// Replaces the document behind the active tab.
///
/// Writes the template when the template tab is active, otherwise the body
/// of the active partial. A dangling partial tab leaves the state unchanged.
#[must_use]
pub fn set_tab_value(state: &AppState, value: String) -> AppState {
    let mut next = state.clone();
    match next.active_tab.clone() {
        TabId::Template => next.template = value,
        TabId::Partial(name) => {
            if let Some(body) = next.partials.get_mut(&name) {
                *body = value;
            } else {
                tracing::warn!(tab = %name, "active tab has no partial, ignoring edit");
            }
        }
    }
    next
}

/// Switches the active tab to `id` without validating it.
#[must_use]
pub fn set_active_tab(state: &AppState, id: TabId) -> AppState {
    let mut next = state.clone();
    next.active_tab = id;
    next
}

/// Flips the rich/raw preview toggle.
#[must_use]
pub fn toggle_preview(state: &AppState) -> AppState {
    let mut next = state.clone();
    next.is_preview = !next.is_preview;
    next
}

/// Opens the name dialog.
///
/// `id = None` starts a create flow with an empty staged name; `id =
/// Some(name)` starts a rename flow with the staged name pre-filled.
#[must_use]
pub fn open_name_modal(state: &AppState, id: Option<String>) -> AppState {
    let mut next = state.clone();
    next.name_modal = NameModal {
        staged_id: id.clone().unwrap_or_default(),
        id,
        is_active: true,
        error: None,
    };
    next
}

/// Closes the name dialog, discarding the staged name and error.
#[must_use]
pub fn cancel_name_modal(state: &AppState) -> AppState {
    let mut next = state.clone();
    next.name_modal = NameModal::inactive();
    next
}

/// Replaces the staged name and recomputes its validation error.
///
/// The error is live after this call: it always reflects the new staged
/// value against the current partials.
#[must_use]
pub fn set_staged_id(state: &AppState, staged_id: String) -> AppState {
    let mut next = state.clone();
    next.name_modal.staged_id = staged_id;
    next.name_modal.error = staged_name_error(&next.name_modal, &next.partials);
    next
}

/// Commits the name dialog.
///
/// Revalidates the staged name first; on failure the dialog stays open
/// showing the error and nothing else changes. On success:
///
/// - create flow: inserts a partial named by the trimmed staged name with
///   [`DEFAULT_PARTIAL_BODY`], appends it to the tab list, and activates it;
/// - rename flow: moves the body under the new name at the same tab
///   position and activates the new name; renaming to the same name is a
///   structural no-op.
///
/// The dialog is reset to inactive on every successful path.
#[must_use]
pub fn submit_name_modal(state: &AppState) -> AppState {
    let mut next = state.clone();
    next.name_modal.error = staged_name_error(&next.name_modal, &next.partials);
    if next.name_modal.error.is_some() {
        tracing::debug!(error = ?next.name_modal.error, "staged name rejected");
        return next;
    }

    let staged = next.name_modal.staged_id.trim().to_string();
    match next.name_modal.id.clone() {
        None => {
            tracing::debug!(name = %staged, "creating partial");
            next.partials
                .insert(staged.clone(), DEFAULT_PARTIAL_BODY.to_string());
            next.tabs.push(staged.clone());
            next.active_tab = TabId::Partial(staged);
        }
        Some(id) if id != staged => {
            if let Some(body) = next.partials.remove(&id) {
                tracing::debug!(from = %id, to = %staged, "renaming partial");
                next.partials.insert(staged.clone(), body);
                if let Some(slot) = next.tabs.iter_mut().find(|tab| **tab == id) {
                    *slot = staged.clone();
                }
                next.active_tab = TabId::Partial(staged);
            } else {
                tracing::warn!(id = %id, "rename target no longer exists, ignoring");
            }
        }
        Some(_) => {
            // Self-rename: nothing to move.
        }
    }

    next.name_modal = NameModal::inactive();
    next
}

/// Removes the partial the dialog is renaming.
///
/// Drops the name from both the partial map and the tab list, then
/// recomputes the active tab: deleting the first tab falls back to the
/// template, otherwise the tab now occupying the deleted tab's former
/// position is selected ("keep the view stable around the deletion point"),
/// falling back to the template when no tab occupies that position any more.
/// The dialog is reset to inactive in every case.
#[must_use]
pub fn delete_partial(state: &AppState) -> AppState {
    let mut next = state.clone();

    if let Some(id) = next.name_modal.id.clone() {
        if let Some(idx) = next.tabs.iter().position(|tab| *tab == id) {
            tracing::debug!(name = %id, index = idx, "deleting partial");
            next.tabs.remove(idx);
            next.partials.remove(&id);
            next.active_tab = if idx == 0 {
                TabId::Template
            } else {
                next.tabs
                    .get(idx)
                    .map_or(TabId::Template, |name| TabId::Partial(name.clone()))
            };
        } else {
            tracing::warn!(id = %id, "delete target no longer exists, ignoring");
        }
    }

    next.name_modal = NameModal::inactive();
    next
}

/// Validation rule for the staged name, in precedence order.
///
/// 1. empty after trimming;
/// 2. trimmed name already a partial key, unless it equals the rename id;
/// 3. any whitespace in the *untrimmed* staged value.
///
/// Shared by [`set_staged_id`] and [`submit_name_modal`] so the stored error
/// can never go stale relative to the staged value.
fn staged_name_error(
    modal: &NameModal,
    partials: &BTreeMap<String, String>,
) -> Option<NameError> {
    let staged = modal.staged_id.trim();

    if staged.is_empty() {
        Some(NameError::Required)
    } else if modal.id.as_deref() != Some(staged) && partials.contains_key(staged) {
        Some(NameError::AlreadyInUse)
    } else if modal.staged_id.chars().any(char::is_whitespace) {
        Some(NameError::HasSpaces)
    } else {
        None
    }
}
