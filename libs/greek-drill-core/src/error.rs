//! Error types for greek-drill-core.

use crate::types::Category;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing curriculum files.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid lesson ID at line {line}: {value}")]
    InvalidId { line: usize, value: String },

    #[error("duplicate lesson ID {id} at line {line}")]
    DuplicateId { id: u32, line: usize },

    #[error("lesson starting at line {line} has no title")]
    MissingTitle { line: usize },

    #[error("malformed entry at line {line}: {value}")]
    MalformedEntry { line: usize, value: String },

    #[error("entry at line {line} appears before any lesson ID")]
    EntryOutsideLesson { line: usize },

    #[error("lesson {id} has no entries")]
    EmptyLesson { id: u32 },
}

/// Errors raised by session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no {category} lesson with id {id}")]
    LessonNotFound { category: Category, id: u32 },

    #[error("{category} lesson {id} has no entries to quiz")]
    EmptyLesson { category: Category, id: u32 },

    #[error("no quiz is in progress")]
    NotInQuiz,

    #[error("answer already submitted, waiting for the next question")]
    InputLocked,

    #[error("no answer feedback is pending")]
    NothingToAdvance,

    #[error("no round is waiting to be continued")]
    NoRoundPending,

    #[error("no lesson has been started")]
    NoLesson,
}
