//! Linter error types.

use thiserror::Error;

/// Errors that can occur while running the external linter.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The linter executable could not be started.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// The executable that was invoked.
        program: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading linter output or waiting for exit.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
