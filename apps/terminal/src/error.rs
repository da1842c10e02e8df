//! Error handling for the terminal front-end

use greek_drill_core::{ParseError, SessionError};
use std::path::PathBuf;
use thiserror::Error;

/// Front-end error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Curriculum error in {path}: {source}")]
    Curriculum {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Errors the user can recover from by typing something else.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Session(_) | Self::UnknownCommand(_) | Self::BadRequest(_)
        )
    }
}

/// Result type alias for front-end operations
pub type Result<T> = std::result::Result<T, AppError>;
