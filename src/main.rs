//! Interactive editor demo.
//!
//! A thin shim around the library: it owns the [`Store`], maps input lines
//! onto [`Action`]s, and re-renders the derived view after every dispatch.
//! All behavior lives in the application layer; this binary only translates.
//!
//! # Commands
//!
//! Normal mode:
//!
//! - `:template` / `:tab <name>`: switch the active tab
//! - `:new`: open the create dialog
//! - `:rename [name]`: open the rename dialog (defaults to the active tab)
//! - `:data <text>`: replace the data document inline
//! - `:data` / `:edit`: replace the data / active document with the lines
//!   that follow, terminated by a `.` on its own line
//! - `:preview`: toggle rich/raw preview
//! - `:help`, `:quit`
//! - anything else: replace the active document with that line
//!
//! While the name dialog is open, a line stages it as the candidate name;
//! `.ok` submits, `.cancel` closes, `.delete` removes the partial being
//! renamed.

use std::io::{self, BufRead, Write};

use mustache_playground::app::{Action, AppState, Store, TabId};
use mustache_playground::render::{compute_preview, HandlebarsEngine};
use mustache_playground::{observability, ui, Config};

/// What a parsed input line asks the shim to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Dispatch an action to the store.
    Dispatch(Action),
    /// Capture the following lines (until `.`) into a document.
    BeginBlock(BlockTarget),
    /// Print the command summary.
    Help,
    /// Leave the loop.
    Quit,
    /// Blank line outside the dialog.
    Noop,
}

/// Destination of a multi-line capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockTarget {
    ActiveDocument,
    Data,
}

fn main() -> mustache_playground::Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    observability::init_tracing(&config);

    let mut store = Store::new(mustache_playground::initialize(&config)?);
    let engine = HandlebarsEngine;

    tracing::info!("mustache playground started");
    println!("mustache playground (:help for commands)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let preview = compute_preview(store.state(), &engine);
        ui::render(&ui::compute(store.state(), preview));

        let prompt = if store.state().name_modal.is_active {
            "name> "
        } else {
            "> "
        };
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(store.state(), line.trim_end()) {
            Command::Dispatch(action) => {
                store.dispatch(action);
            }
            Command::BeginBlock(target) => {
                let text = read_block(&mut lines)?;
                let action = match target {
                    BlockTarget::ActiveDocument => Action::SetTabValue(text),
                    BlockTarget::Data => Action::SetDataValue(text),
                };
                store.dispatch(action);
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Noop => {}
        }
    }

    tracing::info!("mustache playground exiting");
    Ok(())
}

/// Maps one input line onto a command, dialog-sensitively.
///
/// Mirrors the store's dialog state machine: while the dialog is open, input
/// routes to the staged name; otherwise lines are editor commands.
fn parse_command(state: &AppState, line: &str) -> Command {
    if state.name_modal.is_active {
        return match line {
            ".ok" => Command::Dispatch(Action::SubmitNameModal),
            ".cancel" => Command::Dispatch(Action::CancelNameModal),
            ".delete" => Command::Dispatch(Action::DeletePartial),
            staged => Command::Dispatch(Action::SetStagedId(staged.to_string())),
        };
    }

    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "" => Command::Noop,
        ":quit" | ":q" => Command::Quit,
        ":help" => Command::Help,
        ":template" => Command::Dispatch(Action::SetActiveTab(TabId::Template)),
        ":tab" => Command::Dispatch(Action::SetActiveTab(TabId::Partial(rest.to_string()))),
        ":new" => Command::Dispatch(Action::OpenNameModal(None)),
        ":rename" => {
            // No argument renames the active tab; the template tab has no
            // name to rename.
            let id = if rest.is_empty() {
                match &state.active_tab {
                    TabId::Template => return Command::Noop,
                    TabId::Partial(name) => name.clone(),
                }
            } else {
                rest.to_string()
            };
            Command::Dispatch(Action::OpenNameModal(Some(id)))
        }
        ":preview" => Command::Dispatch(Action::TogglePreview),
        ":data" => {
            if rest.is_empty() {
                Command::BeginBlock(BlockTarget::Data)
            } else {
                Command::Dispatch(Action::SetDataValue(rest.to_string()))
            }
        }
        ":edit" => Command::BeginBlock(BlockTarget::ActiveDocument),
        _ => Command::Dispatch(Action::SetTabValue(line.to_string())),
    }
}

/// Reads lines until a lone `.` (or EOF) and joins them with newlines.
fn read_block<I>(lines: &mut I) -> io::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut collected = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim_end() == "." {
            break;
        }
        collected.push(line);
    }
    Ok(collected.join("\n"))
}

fn print_help() {
    println!(
        "\
:template            switch to the template tab
:tab <name>          switch to a partial tab
:new                 create a partial (opens the name dialog)
:rename [name]       rename a partial (opens the name dialog)
:data <text>         replace the data document inline
:data | :edit        multi-line replace (end with a lone '.')
:preview             toggle rich/raw preview
:quit                exit
<text>               replace the active document with <text>

in the name dialog: type a name to stage it, then .ok / .cancel / .delete"
    );
}
