//! Retry rounds for vocabulary lessons.
//!
//! Round 1 asks every word. Each later round asks only the words missed in the
//! round before it, until a round ends with nothing missed.

use crate::error::SessionError;
use crate::types::EntryId;
use serde::{Deserialize, Serialize};

/// Where the engine is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Active,
    Complete,
    Finished,
}

/// Statistics shown between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub round_words: usize,
    pub mastered_this_round: usize,
    pub overall_mastered: usize,
    pub total_words: usize,
    /// Words carried into the next round.
    pub remaining: usize,
}

/// Final statistics once every word has been answered correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterySummary {
    pub total_words: usize,
    pub rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Complete(RoundSummary),
    Finished(MasterySummary),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    round: u32,
    round_words: Vec<EntryId>,
    wrong: Vec<EntryId>,
    total_words: usize,
    phase: RoundPhase,
}

impl RoundState {
    /// Start round 1 over every word of the lesson.
    pub fn new(words: Vec<EntryId>) -> Self {
        Self {
            round: 1,
            total_words: words.len(),
            round_words: words,
            wrong: Vec::new(),
            phase: RoundPhase::Active,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Words asked in the current round.
    pub fn round_words(&self) -> &[EntryId] {
        &self.round_words
    }

    /// Words missed so far in the current round.
    pub fn wrong_words(&self) -> &[EntryId] {
        &self.wrong
    }

    pub fn mastered(&self) -> usize {
        self.total_words - self.wrong.len()
    }

    /// Remember a missed word. Recording the same word twice has no effect.
    pub fn record_wrong(&mut self, entry: EntryId) -> Result<(), SessionError> {
        if self.phase != RoundPhase::Active {
            return Err(SessionError::NotInQuiz);
        }
        if !self.wrong.contains(&entry) {
            self.wrong.push(entry);
        }
        Ok(())
    }

    /// Close the current round once its last question has been answered.
    pub fn finish_round(&mut self) -> Result<RoundOutcome, SessionError> {
        if self.phase != RoundPhase::Active {
            return Err(SessionError::NotInQuiz);
        }

        if self.wrong.is_empty() {
            self.phase = RoundPhase::Finished;
            return Ok(RoundOutcome::Finished(MasterySummary {
                total_words: self.total_words,
                rounds: self.round,
            }));
        }

        self.phase = RoundPhase::Complete;
        Ok(RoundOutcome::Complete(self.summary()))
    }

    /// Move to the next round. Returns the words it will ask.
    pub fn start_next_round(&mut self) -> Result<&[EntryId], SessionError> {
        if self.phase != RoundPhase::Complete {
            return Err(SessionError::NoRoundPending);
        }

        self.round += 1;
        self.round_words = std::mem::take(&mut self.wrong);
        self.phase = RoundPhase::Active;
        Ok(&self.round_words)
    }

    /// Statistics for the current round as it stands.
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            round: self.round,
            round_words: self.round_words.len(),
            mastered_this_round: self.round_words.len() - self.wrong.len(),
            overall_mastered: self.mastered(),
            total_words: self.total_words,
            remaining: self.wrong.len(),
        }
    }

    /// Final statistics, once finished.
    pub fn mastery(&self) -> Option<MasterySummary> {
        (self.phase == RoundPhase::Finished).then(|| MasterySummary {
            total_words: self.total_words,
            rounds: self.round,
        })
    }
}
