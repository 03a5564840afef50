//! Render boundary: the external engine contract and the preview pipeline.
//!
//! # Modules
//!
//! - [`engine`]: the [`Engine`] and [`PartialSource`] traits plus the demo
//!   `handlebars` adapter
//! - [`preview`]: derives rendered output from the current state

pub mod engine;
pub mod preview;

pub use engine::{Engine, EngineError, HandlebarsEngine, PartialSource};
pub use preview::{compute as compute_preview, PreviewError};
