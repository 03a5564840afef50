//! The state store owning the current application state.
//!
//! [`Store`] converts the pure transition set into a live object: it holds
//! the single current [`AppState`] and exposes [`Store::dispatch`], which
//! applies an [`Action`]'s transition to the state held *at apply time* and
//! replaces it with the result.
//!
//! Applying against the live state (rather than a snapshot captured when the
//! caller was handed the store) is the one concurrency-relevant guarantee
//! here: if several actions are queued before any observer re-reads the
//! state, each transition still observes the result of the previous one, so
//! dispatches compose in call order against a monotonically advancing state.
//!
//! The store is an explicit value passed to whoever needs to dispatch; there
//! is no ambient global state.

use super::actions::Action;
use super::state::AppState;
use super::transitions;

/// Owner of the single current [`AppState`].
///
/// All state changes flow through [`Store::dispatch`]; the presentation
/// layer reads the state via [`Store::state`] and re-derives its output
/// after each dispatch.
#[derive(Debug)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self { state: initial }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `action`'s transition to the current state and stores the
    /// result, returning a reference to the new state.
    ///
    /// Never panics and never fails for structurally valid actions; domain
    /// validation failures are carried in the modal sub-state of the
    /// returned value.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        let _span = tracing::debug_span!("dispatch", action = action.name()).entered();
        self.state = transitions::apply(&self.state, action);
        &self.state
    }
}

impl Default for Store {
    /// A store holding the startup state.
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::TabId;
    use pretty_assertions::assert_eq;

    #[test]
    fn dispatch_replaces_the_held_state() {
        let mut store = Store::default();
        store.dispatch(Action::SetDataValue("{}".to_string()));
        assert_eq!(store.state().data, "{}");
    }

    #[test]
    fn back_to_back_dispatches_compose_in_call_order() {
        // The second action must observe the first one's result even when
        // both are issued before anyone re-reads the state: the create flow
        // below only lands on the right tab if SubmitNameModal sees the
        // staged name set by SetStagedId.
        let mut store = Store::default();
        store.dispatch(Action::OpenNameModal(None));
        store.dispatch(Action::SetStagedId("greeting".to_string()));
        store.dispatch(Action::SubmitNameModal);
        store.dispatch(Action::SetTabValue("<p>hi</p>".to_string()));

        let state = store.state();
        assert_eq!(state.active_tab, TabId::Partial("greeting".to_string()));
        assert_eq!(state.partials["greeting"], "<p>hi</p>");
        assert!(state.is_consistent());
    }

    #[test]
    fn failed_validation_leaves_the_store_in_a_valid_state() {
        let mut store = Store::default();
        store.dispatch(Action::OpenNameModal(None));
        store.dispatch(Action::SetStagedId(String::new()));
        store.dispatch(Action::SubmitNameModal);

        assert!(store.state().name_modal.is_active);
        assert!(store.state().name_modal.error.is_some());
        assert!(store.state().is_consistent());
    }
}
