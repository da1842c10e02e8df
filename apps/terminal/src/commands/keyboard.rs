//! Virtual keyboard commands.

use super::Reply;
use crate::display;
use crate::error::{AppError, Result};
use crate::state::AppState;
use greek_drill_core::KeyboardPage;

pub fn show(state: &mut AppState, page: Option<KeyboardPage>) -> Reply {
    if let Some(page) = page {
        state.keyboard = page;
    }
    Reply::text(display::keyboard(state.keyboard))
}

/// Insert the key at a zero-based position on the current page.
pub fn press(state: &mut AppState, row: usize, col: usize) -> Result<Reply> {
    let key = state.keyboard.key(row, col).ok_or_else(|| {
        AppError::BadRequest(format!(
            "no key at row {} column {} on the {} page",
            row + 1,
            col + 1,
            state.keyboard.as_str()
        ))
    })?;
    state.session.insert_key(key)?;
    Ok(buffer(state))
}

pub fn space(state: &mut AppState) -> Result<Reply> {
    state.session.insert_key(" ")?;
    Ok(buffer(state))
}

pub fn backspace(state: &mut AppState) -> Result<Reply> {
    state.session.backspace()?;
    Ok(buffer(state))
}

fn buffer(state: &AppState) -> Reply {
    Reply::text(format!("Answer so far: {}", state.session.input()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::lesson;
    use greek_drill_core::{Category, Curriculum, QuizSettings};

    fn quiz() -> AppState {
        let mut state = AppState::new(
            Curriculum::bundled().unwrap(),
            QuizSettings::default(),
            Some(2),
        );
        lesson::start(&mut state, Category::Verb, 1).unwrap();
        state
    }

    #[test]
    fn keys_build_an_answer() {
        let mut state = quiz();
        press(&mut state, 1, 2).unwrap();
        show(&mut state, Some(KeyboardPage::Accents));
        press(&mut state, 0, 5).unwrap();
        let reply = press(&mut state, 0, 6).unwrap();
        assert_eq!(reply.output, "Answer so far: λύώ");

        let reply = backspace(&mut state).unwrap();
        assert_eq!(reply.output, "Answer so far: λύ");
        space(&mut state).unwrap();
        assert_eq!(state.session.input(), "λύ ");
    }

    #[test]
    fn missing_key_is_a_bad_request() {
        let mut state = quiz();
        let err = press(&mut state, 3, 4).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: no key at row 4 column 5 on the lowercase page");
    }

    #[test]
    fn keys_need_a_quiz() {
        let mut state = AppState::new(
            Curriculum::bundled().unwrap(),
            QuizSettings::default(),
            None,
        );
        assert!(press(&mut state, 0, 0).is_err());
        let reply = show(&mut state, None);
        assert!(reply.output.starts_with("Keyboard: lowercase"));
    }
}
