//! Plain-text frame rendering for the editor demo.
//!
//! Turns a [`ViewModel`] into a text frame and prints it. Deliberately free
//! of state and branching beyond what the view model already encodes; all
//! behavior lives in the application layer.

use std::fmt::Write as _;

use super::viewmodel::ViewModel;

const RULE: &str = "────────────────────────────────────────────────────────";

/// Builds the full text frame for a view model.
#[must_use]
pub fn frame(vm: &ViewModel) -> String {
    let mut out = String::new();

    let tab_bar: Vec<String> = vm
        .tabs
        .iter()
        .map(|tab| {
            if tab.is_active {
                format!("[{}]", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tab_bar.join(" "));
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "── {} ──", vm.editor_title);
    let _ = writeln!(out, "{}", vm.editor_text);
    let _ = writeln!(out, "── data ──");
    let _ = writeln!(out, "{}", vm.data_text);
    let _ = writeln!(out, "{RULE}");

    match &vm.preview {
        Ok(pane) if pane.is_rich => {
            let _ = writeln!(out, "── preview ──");
            let _ = writeln!(out, "{}", pane.content);
        }
        Ok(pane) => {
            let _ = writeln!(out, "── preview (raw) ──");
            let _ = writeln!(out, "{}", pane.content.escape_default());
        }
        Err(message) => {
            let _ = writeln!(out, "!! {message}");
        }
    }

    if let Some(modal) = &vm.modal {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, ":: {} | name: {:?}", modal.title, modal.staged);
        if let Some(error) = &modal.error {
            let _ = writeln!(out, ":: {error}");
        }
        if modal.can_delete {
            let _ = writeln!(out, ":: (.ok to submit, .cancel to close, .delete to remove)");
        } else {
            let _ = writeln!(out, ":: (.ok to submit, .cancel to close)");
        }
    }

    out
}

/// Prints the frame for a view model to stdout.
pub fn render(vm: &ViewModel) {
    print!("{}", frame(vm));
}
