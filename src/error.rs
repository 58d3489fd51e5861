//! Error types
//!
//! Document errors are fatal to startup. Command errors are rendered to the user
//! verbatim and never end the session.

use thiserror::Error;

/// Errors raised while loading, decoding or writing the backing document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document format: {0}")]
    Format(String),

    #[error("document I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        DocumentError::Format(e.to_string())
    }
}

/// Command-level failures. `Display` yields the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NotADirectory(String),

    #[error("{0}")]
    Argument(String),

    #[error("cd: cannot go up from root")]
    UpFromRoot,

    #[error("Error: unknown command '{0}'")]
    UnknownCommand(String),
}

/// Errors raised by the shell front end (startup, script and prompt I/O).
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl From<config::ConfigError> for ShellError {
    fn from(e: config::ConfigError) -> Self {
        ShellError::Config(e.to_string())
    }
}
