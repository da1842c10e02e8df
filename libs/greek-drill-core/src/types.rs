//! Core types for the drill engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Lesson category. Selects prompt wording and whether retry rounds apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Declension,
    Verb,
    Vocabulary,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 3] = [Self::Declension, Self::Vocabulary, Self::Verb];

    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declension => "declension",
            Self::Verb => "verb",
            Self::Vocabulary => "vocabulary",
        }
    }

    /// Parse from string. Accepts singular, plural and short forms.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "declension" | "declensions" | "decl" => Some(Self::Declension),
            "verb" | "verbs" => Some(Self::Verb),
            "vocabulary" | "vocab" => Some(Self::Vocabulary),
            _ => None,
        }
    }

    /// Whether lessons of this category use retry rounds instead of sampling.
    pub fn uses_rounds(self) -> bool {
        matches!(self, Self::Vocabulary)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of an entry within its lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub usize);

/// One row of a lesson table.
///
/// For declension and verb lessons `prompt` is the form label ("Genitive Sg.",
/// "3rd Pl."), `answer` the inflected form and `hint` its meaning. For
/// vocabulary `prompt` is the Greek headword and `answer` the meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntry {
    pub prompt: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl LessonEntry {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// A named, ordered collection of entries from one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headword: Option<String>,
    pub entries: Vec<LessonEntry>,
}

impl Lesson {
    /// The word the lesson drills, as used in question prompts.
    ///
    /// Falls back to the parenthesised part of the title
    /// ("Second Declension Masculine (ὁ ἄνθρωπος)" gives "ὁ ἄνθρωπος"),
    /// dropping a trailing " - gloss", and then to the title itself.
    pub fn subject(&self) -> &str {
        if let Some(headword) = self.headword.as_deref() {
            return headword;
        }

        let inner = self
            .title
            .split_once('(')
            .and_then(|(_, rest)| rest.split_once(')'))
            .map(|(inner, _)| inner);

        match inner {
            Some(inner) => inner.split(" - ").next().unwrap_or(inner).trim(),
            None => self.title.trim(),
        }
    }

    pub fn entry(&self, id: EntryId) -> Option<&LessonEntry> {
        self.entries.get(id.0)
    }

    pub fn entry_ids(&self) -> Vec<EntryId> {
        (0..self.entries.len()).map(EntryId).collect()
    }
}

/// Tunable quiz parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Questions drawn from a declension or verb lesson.
    pub quiz_length: usize,
    pub points_per_correct: u32,
    /// How long answer feedback stays up before the quiz moves on.
    pub feedback_delay_ms: u64,
    /// How long the "enter an answer" notice stays up.
    pub notice_delay_ms: u64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            quiz_length: 5,
            points_per_correct: 10,
            feedback_delay_ms: 2500,
            notice_delay_ms: 2000,
        }
    }
}

impl QuizSettings {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(title: &str, headword: Option<&str>) -> Lesson {
        Lesson {
            id: 1,
            title: title.to_string(),
            intro: None,
            headword: headword.map(str::to_string),
            entries: vec![],
        }
    }

    #[test]
    fn subject_prefers_headword() {
        let l = lesson("εἰμί (I am) - Present", Some("εἰμί"));
        assert_eq!(l.subject(), "εἰμί");
    }

    #[test]
    fn subject_from_parenthesised_title() {
        let l = lesson("Second Declension Masculine (ὁ ἄνθρωπος)", None);
        assert_eq!(l.subject(), "ὁ ἄνθρωπος");

        let l = lesson("Present Active (λύω - I release)", None);
        assert_eq!(l.subject(), "λύω");
    }

    #[test]
    fn subject_falls_back_to_title() {
        let l = lesson("  Section 1A  ", None);
        assert_eq!(l.subject(), "Section 1A");
    }

    #[test]
    fn category_parsing() {
        assert_eq!(Category::from_str("Verbs"), Some(Category::Verb));
        assert_eq!(Category::from_str("vocab"), Some(Category::Vocabulary));
        assert_eq!(Category::from_str("decl"), Some(Category::Declension));
        assert_eq!(Category::from_str("nouns"), None);
    }

    #[test]
    fn default_settings() {
        let settings = QuizSettings::default();
        assert_eq!(settings.quiz_length, 5);
        assert_eq!(settings.points_per_correct, 10);
        assert_eq!(settings.feedback_delay(), Duration::from_millis(2500));
        assert_eq!(settings.notice_delay(), Duration::from_millis(2000));
    }
}
