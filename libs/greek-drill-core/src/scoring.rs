//! Score and streak counters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    pub streak: u32,
    pub correct: u32,
    pub incorrect: u32,
}

impl Scoreboard {
    pub fn record_correct(&mut self, points: u32) {
        self.score += points;
        self.streak += 1;
        self.correct += 1;
    }

    pub fn record_incorrect(&mut self) {
        self.streak = 0;
        self.incorrect += 1;
    }

    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Share of answers that were correct, 0-100.
    pub fn percentage(&self) -> f64 {
        match self.answered() {
            0 => 0.0,
            n => f64::from(self.correct) * 100.0 / f64::from(n),
        }
    }
}

/// Headline shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Mastery,
    Perfect,
    WellDone,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Perfect
        } else if percentage >= 80.0 {
            Self::WellDone
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Mastery => "Complete Mastery!",
            Self::Perfect => "Ἄριστα! Perfect!",
            Self::WellDone => "Εὖ γε! Well done!",
            Self::Good => "Καλῶς! Good!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}
