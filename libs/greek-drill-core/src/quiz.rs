//! Quiz generation from lesson entries.

use crate::types::{Category, EntryId, Lesson, LessonEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single question derived from a lesson entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Lower-cased answer used for matching.
    pub answer: String,
    /// Answer as written in the lesson, for feedback.
    pub display_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub entry: EntryId,
}

/// Ordered questions for one pass through a lesson (or one round).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.questions.iter().map(|q| q.entry)
    }
}

/// Build a quiz for a lesson.
///
/// Declension and verb lessons are shuffled and cut to `quiz_length`.
/// Vocabulary lessons keep every word, since they are drilled in retry rounds
/// rather than sampled.
pub fn generate<R: Rng + ?Sized>(
    lesson: &Lesson,
    category: Category,
    quiz_length: usize,
    rng: &mut R,
) -> Quiz {
    let mut questions: Vec<Question> = lesson
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| build_question(lesson, category, EntryId(idx), entry))
        .collect();

    questions.shuffle(rng);
    if !category.uses_rounds() {
        questions.truncate(quiz_length);
    }

    Quiz { questions }
}

/// Build a vocabulary quiz restricted to `words`, in random order.
///
/// Ids that do not belong to the lesson are skipped.
pub fn generate_round<R: Rng + ?Sized>(lesson: &Lesson, words: &[EntryId], rng: &mut R) -> Quiz {
    let mut questions: Vec<Question> = words
        .iter()
        .filter_map(|&id| {
            lesson
                .entry(id)
                .map(|entry| build_question(lesson, Category::Vocabulary, id, entry))
        })
        .collect();

    questions.shuffle(rng);
    Quiz { questions }
}

fn build_question(
    lesson: &Lesson,
    category: Category,
    id: EntryId,
    entry: &LessonEntry,
) -> Question {
    let prompt = match category {
        Category::Declension => format!("What is the {} of {}?", entry.prompt, lesson.subject()),
        Category::Verb => format!("Conjugate {} in the {}", lesson.subject(), entry.prompt),
        Category::Vocabulary => format!("What does \"{}\" mean?", entry.prompt),
    };

    Question {
        prompt,
        answer: entry.answer.trim().to_lowercase(),
        display_answer: entry.answer.clone(),
        hint: entry.hint.clone(),
        entry: id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn lesson(n: usize) -> Lesson {
        Lesson {
            id: 1,
            title: "Second Declension Masculine (ὁ ἄνθρωπος)".to_string(),
            intro: None,
            headword: None,
            entries: (0..n)
                .map(|i| {
                    LessonEntry::new(format!("Form {i}"), format!("Answer {i}"))
                        .with_hint(format!("hint {i}"))
                })
                .collect(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn declension_quiz_is_truncated_to_five_distinct() {
        let quiz = generate(&lesson(8), Category::Declension, 5, &mut rng());
        assert_eq!(quiz.len(), 5);
        let distinct: HashSet<_> = quiz.entries().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn short_lesson_returns_all_entries() {
        let quiz = generate(&lesson(3), Category::Verb, 5, &mut rng());
        assert_eq!(quiz.len(), 3);
        let distinct: HashSet<_> = quiz.entries().collect();
        assert_eq!(distinct, HashSet::from([EntryId(0), EntryId(1), EntryId(2)]));
    }

    #[test]
    fn vocabulary_quiz_keeps_every_word() {
        let quiz = generate(&lesson(24), Category::Vocabulary, 5, &mut rng());
        assert_eq!(quiz.len(), 24);
        let distinct: HashSet<_> = quiz.entries().collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn prompts_follow_category() {
        let l = lesson(1);
        let q = &generate(&l, Category::Declension, 5, &mut rng()).questions[0];
        assert_eq!(q.prompt, "What is the Form 0 of ὁ ἄνθρωπος?");
        assert_eq!(q.answer, "answer 0");
        assert_eq!(q.display_answer, "Answer 0");
        assert_eq!(q.hint.as_deref(), Some("hint 0"));

        let q = &generate(&l, Category::Verb, 5, &mut rng()).questions[0];
        assert_eq!(q.prompt, "Conjugate ὁ ἄνθρωπος in the Form 0");

        let q = &generate(&l, Category::Vocabulary, 5, &mut rng()).questions[0];
        assert_eq!(q.prompt, "What does \"Form 0\" mean?");
    }

    #[test]
    fn round_quiz_uses_only_given_words() {
        let l = lesson(6);
        let quiz = generate_round(&l, &[EntryId(4), EntryId(1), EntryId(99)], &mut rng());
        let got: HashSet<_> = quiz.entries().collect();
        assert_eq!(got, HashSet::from([EntryId(1), EntryId(4)]));
    }

    #[test]
    fn same_seed_gives_same_order() {
        let l = lesson(10);
        let a = generate(&l, Category::Vocabulary, 5, &mut StdRng::seed_from_u64(3));
        let b = generate(&l, Category::Vocabulary, 5, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
