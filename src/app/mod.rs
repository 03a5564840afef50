//! Application layer: state, actions, transitions, and the store.
//!
//! This is the core of the playground. The flow is unidirectional:
//!
//! ```text
//! caller → Action → Store::dispatch → transitions::apply → new AppState
//!                                                              │
//!            presentation re-derives (tabs, editors, preview) ←┘
//! ```
//!
//! # Modules
//!
//! - [`state`]: the immutable [`AppState`] value and its sub-state types
//! - [`actions`]: the closed [`Action`] union of transition names
//! - [`transitions`]: the pure transition functions and staged-name
//!   validation
//! - [`store`]: the [`Store`] owning the current state
//!
//! The dialog sub-state is a small state machine: inactive, active-create
//! (`id = None`), active-rename (`id = Some(name)`). `OpenNameModal` enters
//! an active shape; `CancelNameModal`, a valid `SubmitNameModal`, and
//! `DeletePartial` return to inactive; an invalid submit stays active with
//! the error carried as data.

pub mod actions;
pub mod state;
pub mod store;
pub mod transitions;

pub use actions::Action;
pub use state::{AppState, NameError, NameModal, TabId};
pub use store::Store;
