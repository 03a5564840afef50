//! View model types for the editor demo.
//!
//! A [`ViewModel`] is a stateless snapshot of everything the terminal
//! renderer needs: tab labels, the two editor panes, the preview pane (or
//! its error), and the dialog if open. It is recomputed from scratch after
//! every dispatch and never feeds back into state.

use crate::app::{AppState, TabId};
use crate::render::PreviewError;

/// One entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    /// Display text ("template" or the partial name).
    pub label: String,
    /// Whether this tab is the one being edited.
    pub is_active: bool,
}

/// The preview pane contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPane {
    /// Rendered output from the engine.
    pub content: String,
    /// Rich mode shows the output as-is; raw mode shows it escaped.
    pub is_rich: bool,
}

/// The open name dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// "New partial" or "Rename <name>".
    pub title: String,
    /// Staged candidate name.
    pub staged: String,
    /// Inline validation message, if any.
    pub error: Option<String>,
    /// Whether a delete is offered (rename flow only).
    pub can_delete: bool,
}

/// Renderable snapshot of the whole screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Template tab first, then the partial tabs in display order.
    pub tabs: Vec<TabLabel>,
    /// Title of the active editor pane.
    pub editor_title: String,
    /// Text of the active editor pane.
    pub editor_text: String,
    /// Text of the data editor pane.
    pub data_text: String,
    /// Preview pane, or the downstream error banner text.
    pub preview: Result<PreviewPane, String>,
    /// The dialog, when open.
    pub modal: Option<ModalView>,
}

/// Computes the view model for `state` and an already-derived preview.
#[must_use]
pub fn compute(state: &AppState, preview: Result<String, PreviewError>) -> ViewModel {
    let mut tabs = vec![TabLabel {
        label: "template".to_string(),
        is_active: state.active_tab == TabId::Template,
    }];
    tabs.extend(state.tabs.iter().map(|name| TabLabel {
        label: name.clone(),
        is_active: state.active_tab == TabId::Partial(name.clone()),
    }));

    let modal = state.name_modal.is_active.then(|| ModalView {
        title: state
            .name_modal
            .id
            .as_ref()
            .map_or_else(|| "New partial".to_string(), |id| format!("Rename {id}")),
        staged: state.name_modal.staged_id.clone(),
        error: state.name_modal.error.map(|e| e.to_string()),
        can_delete: state.name_modal.id.is_some(),
    });

    ViewModel {
        tabs,
        editor_title: state.active_tab.to_string(),
        editor_text: state.active_text().to_string(),
        data_text: state.data.clone(),
        preview: preview
            .map(|content| PreviewPane {
                content,
                is_rich: state.is_preview,
            })
            .map_err(|e| e.to_string()),
        modal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::transitions;

    #[test]
    fn template_tab_is_listed_first_and_active_by_default() {
        let vm = compute(&AppState::default(), Ok(String::new()));
        assert_eq!(vm.tabs[0].label, "template");
        assert!(vm.tabs[0].is_active);
        assert!(vm.modal.is_none());
    }

    #[test]
    fn partial_tabs_follow_display_order() {
        let state = AppState::default();
        let state = transitions::open_name_modal(&state, None);
        let state = transitions::set_staged_id(&state, "zeta".to_string());
        let state = transitions::submit_name_modal(&state);
        let state = transitions::open_name_modal(&state, None);
        let state = transitions::set_staged_id(&state, "alpha".to_string());
        let state = transitions::submit_name_modal(&state);

        let vm = compute(&state, Ok(String::new()));
        let labels: Vec<&str> = vm.tabs.iter().map(|t| t.label.as_str()).collect();
        // Creation order, not lexicographic order.
        assert_eq!(labels, vec!["template", "zeta", "alpha"]);
        assert!(vm.tabs[2].is_active);
    }

    #[test]
    fn open_dialog_carries_the_inline_error() {
        let state = transitions::open_name_modal(&AppState::default(), None);
        let state = transitions::set_staged_id(&state, "a b".to_string());

        let vm = compute(&state, Ok(String::new()));
        let modal = vm.modal.unwrap();
        assert_eq!(modal.title, "New partial");
        assert_eq!(modal.error.as_deref(), Some("Name may not have spaces"));
        assert!(!modal.can_delete);
    }

    #[test]
    fn rename_dialog_offers_delete() {
        let state = AppState::default();
        let state = transitions::open_name_modal(&state, None);
        let state = transitions::set_staged_id(&state, "x".to_string());
        let state = transitions::submit_name_modal(&state);
        let state = transitions::open_name_modal(&state, Some("x".to_string()));

        let vm = compute(&state, Ok(String::new()));
        let modal = vm.modal.unwrap();
        assert_eq!(modal.title, "Rename x");
        assert!(modal.can_delete);
    }
}
