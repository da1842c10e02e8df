//! Quiz session state and the transitions between its screens.
//!
//! A session moves `Menu -> Quiz -> (RoundComplete -> Quiz)* -> Results`.
//! Every transition takes the state by value and hands back the next one, so
//! the presentation layer only ever holds a single current state.
//!
//! After a graded answer the session keeps the feedback pending and refuses
//! further input. The caller shows the feedback for
//! [`QuizSettings::feedback_delay`] and then calls [`SessionState::advance`].

use crate::curriculum::Curriculum;
use crate::error::SessionError;
use crate::matching::{check_answer, AnswerVerdict, MatchTier};
use crate::quiz::{generate, generate_round, Question, Quiz};
use crate::rounds::{MasterySummary, RoundOutcome, RoundState, RoundSummary};
use crate::scoring::{Grade, Scoreboard};
use crate::types::{Category, Lesson, QuizSettings};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Menu,
    Quiz,
    RoundComplete,
    Results,
}

/// Feedback for a graded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    Correct {
        tier: MatchTier,
    },
    Incorrect {
        answer: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// What happened to a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input. Nothing was scored and the question stays put.
    EnterAnswer,
    Graded(Feedback),
}

/// Data for the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Zero-based index of the current question.
    pub current: usize,
    pub total: usize,
    pub answered: Vec<Option<bool>>,
}

/// Data for the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub grade: Grade,
    pub score: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastery: Option<MasterySummary>,
    pub elapsed_secs: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveLesson {
    category: Category,
    lesson: Lesson,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    mode: Mode,
    settings: QuizSettings,
    active: Option<ActiveLesson>,
    quiz: Quiz,
    current: usize,
    scoreboard: Scoreboard,
    answered: Vec<Option<bool>>,
    input: String,
    pending: Option<Feedback>,
    rounds: Option<RoundState>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::menu(QuizSettings::default())
    }
}

impl SessionState {
    /// A session sitting on the menu with no lesson.
    pub fn menu(settings: QuizSettings) -> Self {
        Self {
            mode: Mode::Menu,
            settings,
            active: None,
            quiz: Quiz::default(),
            current: 0,
            scoreboard: Scoreboard::default(),
            answered: Vec::new(),
            input: String::new(),
            pending: None,
            rounds: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Start a fresh session on a lesson.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LessonNotFound` if the curriculum has no such
    /// lesson and `SessionError::EmptyLesson` if it has no entries.
    pub fn select_lesson<R: Rng + ?Sized>(
        curriculum: &Curriculum,
        category: Category,
        id: u32,
        settings: &QuizSettings,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let lesson = curriculum
            .find(category, id)
            .ok_or(SessionError::LessonNotFound { category, id })?;
        Self::start(lesson.clone(), category, settings.clone(), rng)
    }

    fn start<R: Rng + ?Sized>(
        lesson: Lesson,
        category: Category,
        settings: QuizSettings,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if lesson.entries.is_empty() {
            return Err(SessionError::EmptyLesson {
                category,
                id: lesson.id,
            });
        }

        let quiz = generate(&lesson, category, settings.quiz_length, rng);
        let rounds = category
            .uses_rounds()
            .then(|| RoundState::new(quiz.entries().collect()));

        tracing::info!(
            category = %category,
            lesson = lesson.id,
            questions = quiz.len(),
            "lesson started"
        );

        let mut state = Self::menu(settings);
        state.mode = Mode::Quiz;
        state.answered = vec![None; quiz.len()];
        state.quiz = quiz;
        state.rounds = rounds;
        state.active = Some(ActiveLesson { category, lesson });
        state.started_at = Some(Utc::now());
        Ok(state)
    }

    /// Grade `text` against the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInQuiz` outside a quiz and
    /// `SessionError::InputLocked` while feedback for the previous answer is
    /// still pending.
    pub fn submit_answer(mut self, text: &str) -> Result<(Self, Submission), SessionError> {
        if self.mode != Mode::Quiz {
            return Err(SessionError::NotInQuiz);
        }
        if self.pending.is_some() {
            return Err(SessionError::InputLocked);
        }
        let question = self
            .quiz
            .get(self.current)
            .cloned()
            .ok_or(SessionError::NotInQuiz)?;

        let feedback = match check_answer(text, &question.answer) {
            AnswerVerdict::Empty => return Ok((self, Submission::EnterAnswer)),
            AnswerVerdict::Accepted(tier) => {
                self.scoreboard.record_correct(self.settings.points_per_correct);
                self.answered[self.current] = Some(true);
                Feedback::Correct { tier }
            }
            AnswerVerdict::Rejected => {
                self.scoreboard.record_incorrect();
                if let Some(rounds) = self.rounds.as_mut() {
                    rounds.record_wrong(question.entry)?;
                }
                self.answered[self.current] = Some(false);
                Feedback::Incorrect {
                    answer: question.display_answer,
                    hint: question.hint,
                }
            }
        };

        tracing::debug!(
            question = self.current,
            correct = feedback.is_correct(),
            score = self.scoreboard.score,
            streak = self.scoreboard.streak,
            "answer graded"
        );

        self.input = text.to_string();
        self.pending = Some(feedback.clone());
        Ok((self, Submission::Graded(feedback)))
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(self) -> Result<(Self, Submission), SessionError> {
        let text = self.input.clone();
        self.submit_answer(&text)
    }

    /// Move past the pending feedback to the next question, or close the
    /// quiz when it was the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NothingToAdvance` if no answer is pending.
    pub fn advance(mut self) -> Result<Self, SessionError> {
        if self.pending.take().is_none() {
            return Err(SessionError::NothingToAdvance);
        }
        self.input.clear();

        if self.current + 1 < self.quiz.len() {
            self.current += 1;
            return Ok(self);
        }

        match self.rounds.as_mut().map(RoundState::finish_round).transpose()? {
            Some(RoundOutcome::Complete(summary)) => {
                tracing::info!(
                    round = summary.round,
                    mastered = summary.overall_mastered,
                    total = summary.total_words,
                    "round complete"
                );
                self.mode = Mode::RoundComplete;
            }
            Some(RoundOutcome::Finished(_)) | None => {
                self.mode = Mode::Results;
                self.finished_at = Some(Utc::now());
                tracing::info!(score = self.scoreboard.score, "quiz finished");
            }
        }
        Ok(self)
    }

    /// Start the next vocabulary round with the words missed in the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoRoundPending` unless a round has just ended
    /// with missed words.
    pub fn continue_to_next_round<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if self.mode != Mode::RoundComplete {
            return Err(SessionError::NoRoundPending);
        }
        let active = self.active.as_ref().ok_or(SessionError::NoLesson)?;
        let rounds = self.rounds.as_mut().ok_or(SessionError::NoRoundPending)?;

        let words = rounds.start_next_round()?.to_vec();
        self.quiz = generate_round(&active.lesson, &words, rng);
        self.current = 0;
        self.answered = vec![None; self.quiz.len()];
        self.input.clear();
        self.mode = Mode::Quiz;

        tracing::info!(round = rounds.round(), words = words.len(), "next round");
        Ok(self)
    }

    /// Leave the lesson. Score and round progress are discarded.
    pub fn return_to_menu(self) -> Self {
        Self::menu(self.settings)
    }

    /// Restart the current lesson from scratch.
    pub fn practice_again<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Self, SessionError> {
        let active = self.active.ok_or(SessionError::NoLesson)?;
        Self::start(active.lesson, active.category, self.settings, rng)
    }

    /// Append text from the keyboard to the input buffer.
    pub fn insert_key(&mut self, key: &str) -> Result<(), SessionError> {
        self.ensure_accepting_input()?;
        self.input.push_str(key);
        Ok(())
    }

    /// Replace the input buffer.
    pub fn type_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.ensure_accepting_input()?;
        self.input = text.to_string();
        Ok(())
    }

    /// Remove the last character of the input buffer.
    pub fn backspace(&mut self) -> Result<(), SessionError> {
        self.ensure_accepting_input()?;
        self.input.pop();
        Ok(())
    }

    fn ensure_accepting_input(&self) -> Result<(), SessionError> {
        if self.mode != Mode::Quiz {
            return Err(SessionError::NotInQuiz);
        }
        if self.pending.is_some() {
            return Err(SessionError::InputLocked);
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn category(&self) -> Option<Category> {
        self.active.as_ref().map(|a| a.category)
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.active.as_ref().map(|a| &a.lesson)
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.mode {
            Mode::Quiz => self.quiz.get(self.current),
            _ => None,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending_feedback(&self) -> Option<&Feedback> {
        self.pending.as_ref()
    }

    pub fn rounds(&self) -> Option<&RoundState> {
        self.rounds.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.current,
            total: self.quiz.len(),
            answered: self.answered.clone(),
        }
    }

    /// Statistics for the round that just ended.
    pub fn round_summary(&self) -> Option<RoundSummary> {
        match self.mode {
            Mode::RoundComplete => self.rounds.as_ref().map(RoundState::summary),
            _ => None,
        }
    }

    /// Final statistics, once on the results screen.
    pub fn results(&self) -> Option<ResultsSummary> {
        if self.mode != Mode::Results {
            return None;
        }

        let mastery = self.rounds.as_ref().and_then(RoundState::mastery);
        let percentage = self.scoreboard.percentage();
        let grade = if mastery.is_some() {
            Grade::Mastery
        } else {
            Grade::from_percentage(percentage)
        };
        let elapsed_secs = match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => (end - start).num_seconds(),
            _ => 0,
        };

        Some(ResultsSummary {
            grade,
            score: self.scoreboard.score,
            correct: self.scoreboard.correct,
            incorrect: self.scoreboard.incorrect,
            percentage,
            mastery,
            elapsed_secs,
        })
    }
}
