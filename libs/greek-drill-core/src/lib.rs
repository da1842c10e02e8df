//! Core drill engine for Ancient Greek grammar and vocabulary.
//!
//! Provides:
//! - Curriculum parser for lesson files (declensions, verbs, vocabulary)
//! - Quiz generation with an injectable random source
//! - Diacritic-tolerant answer matching
//! - Retry rounds for vocabulary mastery
//! - Session state machine driving a front-end

pub mod curriculum;
pub mod error;
pub mod keyboard;
pub mod matching;
pub mod quiz;
pub mod rounds;
pub mod scoring;
pub mod session;
pub mod types;

pub use curriculum::{parse, Curriculum};
pub use error::{ParseError, Result, SessionError};
pub use keyboard::KeyboardPage;
pub use matching::{check_answer, fold_diacritics, is_accepted, normalize, AnswerVerdict, MatchTier};
pub use quiz::{generate, generate_round, Question, Quiz};
pub use rounds::{MasterySummary, RoundOutcome, RoundPhase, RoundState, RoundSummary};
pub use scoring::{Grade, Scoreboard};
pub use session::{Feedback, Mode, Progress, ResultsSummary, SessionState, Submission};
pub use types::{Category, EntryId, Lesson, LessonEntry, QuizSettings};
