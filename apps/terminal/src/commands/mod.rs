//! Commands read from the terminal, one per line.

pub mod keyboard;
pub mod lesson;
pub mod study;

use crate::display;
use crate::error::{AppError, Result};
use crate::state::AppState;
use greek_drill_core::{Category, KeyboardPage, Mode};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Start { category: Category, id: u32 },
    Continue,
    Menu,
    Again,
    Keys(Option<KeyboardPage>),
    /// Zero-based keyboard position.
    Key { row: usize, col: usize },
    Space,
    Back,
    Submit,
    Answer(String),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse a line.
    ///
    /// In a quiz only the quiz controls (`menu`, `keys`, `key`, `space`, `back`,
    /// `submit`, `show`, `help`, `quit`) are commands. Every other line is an
    /// answer, including `list`, `start`, `continue` and `again`.
    pub fn parse(line: &str, mode: Mode) -> Result<Self> {
        let trimmed = line.trim();
        let mut words = trimmed.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        // Quiz controls are recognised everywhere.
        let command = match (head.as_str(), args.as_slice()) {
            ("menu", []) => Self::Menu,
            ("keys", []) => Self::Keys(None),
            ("keys", [page]) => Self::Keys(Some(
                KeyboardPage::from_str(page)
                    .ok_or_else(|| AppError::BadRequest(format!("unknown keyboard page: {page}")))?,
            )),
            ("key", [row, col]) => Self::Key {
                row: parse_position(row)?,
                col: parse_position(col)?,
            },
            ("space", []) => Self::Space,
            ("back", []) => Self::Back,
            ("submit", []) => Self::Submit,
            ("show", []) => Self::Show,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            ("", []) if mode == Mode::Quiz => Self::Submit,
            // Navigation words like "again" are also vocabulary answers.
            _ if mode == Mode::Quiz => Self::Answer(trimmed.to_string()),
            ("list", []) => Self::List,
            ("start", [category, id]) => Self::Start {
                category: Category::from_str(category)
                    .ok_or_else(|| AppError::BadRequest(format!("unknown category: {category}")))?,
                id: id
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid lesson id: {id}")))?,
            },
            ("continue", []) => Self::Continue,
            ("again", []) => Self::Again,
            ("", []) => Self::Show,
            ("start", _) => return Err(AppError::BadRequest("usage: start <category> <id>".into())),
            ("key", _) => return Err(AppError::BadRequest("usage: key <row> <col>".into())),
            _ => return Err(AppError::UnknownCommand(trimmed.to_string())),
        };
        Ok(command)
    }
}

fn parse_position(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(AppError::BadRequest(format!("invalid key position: {value}"))),
    }
}

/// Work the command loop does after printing a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Show feedback for the delay, then move to the next question.
    Advance(Duration),
    /// Show a notice for the delay, then redraw the screen.
    Redraw(Duration),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub follow_up: Option<FollowUp>,
    pub quit: bool,
}

impl Reply {
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }
}

pub fn dispatch(state: &mut AppState, command: Command) -> Result<Reply> {
    tracing::debug!(?command, "dispatch");
    match command {
        Command::List => Ok(Reply::text(display::menu(&state.curriculum))),
        Command::Start { category, id } => lesson::start(state, category, id),
        Command::Continue => lesson::continue_round(state),
        Command::Menu => Ok(lesson::menu(state)),
        Command::Again => lesson::again(state),
        Command::Keys(page) => Ok(keyboard::show(state, page)),
        Command::Key { row, col } => keyboard::press(state, row, col),
        Command::Space => keyboard::space(state),
        Command::Back => keyboard::backspace(state),
        Command::Submit => study::submit(state),
        Command::Answer(text) => study::answer(state, &text),
        Command::Show => Ok(Reply::text(display::screen(&state.session, &state.curriculum))),
        Command::Help => Ok(Reply::text(display::HELP)),
        Command::Quit => Ok(Reply {
            output: "Χαῖρε! Goodbye.".to_string(),
            quit: true,
            ..Reply::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_menu_commands() {
        assert_eq!(Command::parse("list", Mode::Menu).unwrap(), Command::List);
        assert_eq!(
            Command::parse("  start Verbs 3 ", Mode::Menu).unwrap(),
            Command::Start {
                category: Category::Verb,
                id: 3
            }
        );
        assert_eq!(Command::parse("QUIT", Mode::Results).unwrap(), Command::Quit);
        assert_eq!(Command::parse("", Mode::Menu).unwrap(), Command::Show);
    }

    #[test]
    fn parse_keyboard_commands() {
        assert_eq!(
            Command::parse("keys accents", Mode::Quiz).unwrap(),
            Command::Keys(Some(KeyboardPage::Accents))
        );
        assert_eq!(
            Command::parse("key 1 2", Mode::Quiz).unwrap(),
            Command::Key { row: 0, col: 1 }
        );
        assert!(matches!(
            Command::parse("key 0 1", Mode::Menu),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn quiz_lines_are_answers() {
        assert_eq!(
            Command::parse(" λύω ", Mode::Quiz).unwrap(),
            Command::Answer("λύω".to_string())
        );
        assert_eq!(
            Command::parse("I release", Mode::Quiz).unwrap(),
            Command::Answer("I release".to_string())
        );
        assert_eq!(
            Command::parse("start over", Mode::Quiz).unwrap(),
            Command::Answer("start over".to_string())
        );
        assert_eq!(Command::parse("", Mode::Quiz).unwrap(), Command::Submit);
    }

    #[test]
    fn navigation_words_are_answers_in_a_quiz() {
        for word in ["again", "continue", "list", "start verb 1"] {
            assert_eq!(
                Command::parse(word, Mode::Quiz).unwrap(),
                Command::Answer(word.to_string())
            );
        }
        assert_eq!(Command::parse("again", Mode::Results).unwrap(), Command::Again);
        assert_eq!(
            Command::parse("continue", Mode::RoundComplete).unwrap(),
            Command::Continue
        );
        assert_eq!(Command::parse("menu", Mode::Quiz).unwrap(), Command::Menu);
        assert_eq!(Command::parse("quit", Mode::Quiz).unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_outside_quiz() {
        assert!(matches!(
            Command::parse("λύω", Mode::Menu),
            Err(AppError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse("start verb", Mode::Menu),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            Command::parse("start noun 1", Mode::Menu),
            Err(AppError::BadRequest(_))
        ));
    }
}
