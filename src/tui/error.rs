//! UI error types

use thiserror::Error;

/// Errors that can occur while running the TUI
#[derive(Debug, Error)]
pub enum UiError {
    /// stdin or stdout is not attached to a terminal
    #[error("browse needs an interactive terminal; use `catalogr list` instead")]
    NotATerminal,

    /// The terminal input thread went away
    #[error("terminal input closed")]
    InputClosed,

    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
