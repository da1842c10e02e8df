//! Plain-text rendering of session snapshots.

use greek_drill_core::{
    Category, Curriculum, Feedback, Grade, KeyboardPage, Lesson, Mode, Progress, ResultsSummary,
    RoundSummary, SessionState,
};

pub const HELP: &str = "\
Commands:
  list                     show the lessons
  start <category> <id>    start a lesson (declension, verb or vocabulary)
  continue                 start the next vocabulary round
  again                    practice the same lesson again
  menu                     back to the menu
  keys [page]              show the Greek keyboard
                           (lowercase, breathing, accents, capitals, capitals-plus)
  key <row> <col>          insert a letter from the keyboard
  space                    insert a space
  back                     delete the last character
  submit                   submit the letters inserted so far
  show                     show the current screen again
  help                     show this help
  quit                     leave
During a quiz any line other than menu, keys, key, space, back, submit, show,
help or quit is your answer. Inserted letters come before it.";

pub fn welcome(curriculum: &Curriculum) -> String {
    format!(
        "Χαῖρε! (Welcome!)\nYour Daily Classical Greek Practice\n\n{}\nType `help` for commands.",
        menu(curriculum)
    )
}

fn category_heading(category: Category) -> &'static str {
    match category {
        Category::Declension => "Declension Drills",
        Category::Vocabulary => "Vocabulary Flash",
        Category::Verb => "Verb Conjugations",
    }
}

pub fn menu(curriculum: &Curriculum) -> String {
    let mut lines = Vec::new();
    for category in Category::ALL {
        let lessons = curriculum.lessons(category);
        if lessons.is_empty() {
            continue;
        }
        lines.push(format!("{} (start {} <id>)", category_heading(category), category));
        for lesson in lessons {
            let detail = match category {
                Category::Vocabulary => format!("{} words", lesson.entries.len()),
                _ => lesson.intro.clone().unwrap_or_default(),
            };
            if detail.is_empty() {
                lines.push(format!("  {:>2}. {}", lesson.id, lesson.title));
            } else {
                lines.push(format!("  {:>2}. {} - {}", lesson.id, lesson.title, detail));
            }
        }
        lines.push(String::new());
    }
    if lines.is_empty() {
        return "No lessons available.".to_string();
    }
    lines.pop();
    lines.join("\n")
}

pub fn lesson_intro(lesson: &Lesson) -> String {
    match &lesson.intro {
        Some(intro) => format!("== {} ==\n{}", lesson.title, intro),
        None => format!("== {} ==", lesson.title),
    }
}

/// One mark per question: answered right, answered wrong, current, pending.
pub fn progress_bar(progress: &Progress) -> String {
    progress
        .answered
        .iter()
        .enumerate()
        .map(|(idx, answered)| match answered {
            Some(true) => '✓',
            Some(false) => '✗',
            None if idx == progress.current => '●',
            None => '·',
        })
        .collect()
}

pub fn question(session: &SessionState) -> String {
    let Some(question) = session.current_question() else {
        return String::new();
    };
    let progress = session.progress();
    let board = session.scoreboard();

    let mut lines = Vec::new();
    let position = format!("Question {} of {}", progress.current + 1, progress.total);
    match session.rounds() {
        Some(rounds) => lines.push(format!(
            "Round {} · {} ({} words this round)",
            rounds.round(),
            position,
            rounds.round_words().len()
        )),
        None => lines.push(position),
    }
    lines.push(format!(
        "Score: {}  Streak: {}  [{}]",
        board.score,
        board.streak,
        progress_bar(&progress)
    ));
    lines.push(question.prompt.clone());
    if !session.input().is_empty() {
        lines.push(format!("Answer so far: {}", session.input()));
    }
    lines.join("\n")
}

pub fn feedback(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Correct { .. } => "✨ Ἄριστα! (Excellent!)".to_string(),
        Feedback::Incorrect { answer, hint } => match hint {
            Some(hint) => format!("Not quite! The answer is: {answer}\n💡 {hint}"),
            None => format!("Not quite! The answer is: {answer}"),
        },
    }
}

pub fn enter_an_answer() -> &'static str {
    "Enter an answer!\n💡 Use `keys` and `key <row> <col>` to type Greek letters"
}

pub fn round_summary(summary: &RoundSummary) -> String {
    format!(
        "Round {} Complete!\nYou mastered {} of {} words this round\nOverall: {}/{} words mastered\n{} left to review. Type `continue` for Round {}, or `menu`.",
        summary.round,
        summary.mastered_this_round,
        summary.round_words,
        summary.overall_mastered,
        summary.total_words,
        summary.remaining,
        summary.round + 1,
    )
}

pub fn results(results: &ResultsSummary) -> String {
    let mut lines = vec![results.grade.headline().to_string()];
    if let Some(mastery) = &results.mastery {
        lines.push(format!("All {} words mastered!", mastery.total_words));
        let plural = if mastery.rounds > 1 { "s" } else { "" };
        lines.push(format!("Completed in {} round{plural}", mastery.rounds));
    }
    lines.push(format!("{} points", results.score));
    lines.push(format!("Time: {}s", results.elapsed_secs));
    if results.grade != Grade::Mastery {
        lines.push(format!(
            "{} of {} correct ({:.0}%)",
            results.correct,
            results.correct + results.incorrect,
            results.percentage
        ));
    }
    lines.push("Type `again` to practice again, or `menu`.".to_string());
    lines.join("\n")
}

pub fn keyboard(page: KeyboardPage) -> String {
    let pages: Vec<&str> = KeyboardPage::ALL.iter().map(|p| p.as_str()).collect();
    let mut lines = vec![format!("Keyboard: {} [{}]", page.as_str(), pages.join(" | "))];
    for (idx, row) in page.layout().iter().enumerate() {
        lines.push(format!("  {}: {}", idx + 1, row.join(" ")));
    }
    lines.join("\n")
}

/// The screen for the session's current mode.
pub fn screen(session: &SessionState, curriculum: &Curriculum) -> String {
    match session.mode() {
        Mode::Menu => menu(curriculum),
        Mode::Quiz => question(session),
        Mode::RoundComplete => session
            .round_summary()
            .map(|s| round_summary(&s))
            .unwrap_or_default(),
        Mode::Results => session.results().map(|r| results(&r)).unwrap_or_default(),
    }
}
