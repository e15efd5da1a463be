//! Error types for password generation and clipboard access.

use thiserror::Error;

/// Errors returned by the generator and by request parsing.
///
/// Both are recoverable: the shell reports them and keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Length is non-numeric, not positive, or too short to cover every
    /// selected class.
    #[error("invalid length")]
    InvalidLength,

    /// The class set passed to the generator was empty.
    #[error("no character type selected")]
    NoCharacterClassSelected,
}

/// Clipboard failures. Never fatal, always shown as a warning.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Copying was switched off or no clipboard was provided.
    #[error("clipboard disabled")]
    Disabled,

    /// The system clipboard could not be opened.
    #[error("clipboard init error: {0}")]
    Unavailable(String),

    /// The clipboard rejected the contents.
    #[error("clipboard set error: {0}")]
    Write(String),
}
