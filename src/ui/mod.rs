//! Presentation layer for the editor demo.
//!
//! Strictly read-only over [`AppState`](crate::app::AppState): the view
//! model is derived from state plus the already-computed preview, and the
//! renderer prints it. All changes flow back through the store's actions.
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable snapshot types and their computation
//! - [`renderer`]: plain-text frame output

pub mod renderer;
pub mod viewmodel;

pub use renderer::{frame, render};
pub use viewmodel::{compute, ModalView, PreviewPane, TabLabel, ViewModel};
