//! Domain layer: error types shared across the crate.
//!
//! Kept separate from the application layer so the render boundary and the
//! demo binaries can report failures without depending on editor state.

pub mod error;

pub use error::{PlaygroundError, Result};
