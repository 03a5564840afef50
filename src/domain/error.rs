//! Error types for the playground.
//!
//! This module defines the top-level [`PlaygroundError`] and the crate
//! [`Result`] alias. Errors at other seams live next to those seams:
//! staged-name validation in [`crate::app::state::NameError`] (data, not a
//! raised error) and the render boundary in [`crate::render`].

use thiserror::Error;

/// Top-level error for playground startup and configuration.
///
/// The core transitions never produce errors; everything here arises at the
/// process boundary (argument parsing, workspace-file loading, terminal I/O).
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Command-line configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The startup workspace file could not be parsed.
    #[error("Workspace error: {0}")]
    Workspace(String),
}

/// A specialized `Result` for playground operations.
pub type Result<T> = std::result::Result<T, PlaygroundError>;
