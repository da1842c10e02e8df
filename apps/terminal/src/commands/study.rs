//! Answer submission commands.

use super::{FollowUp, Reply};
use crate::display;
use crate::error::Result;
use crate::state::AppState;
use greek_drill_core::Submission;

/// Submit a typed line, after any letters inserted from the keyboard.
pub fn answer(state: &mut AppState, text: &str) -> Result<Reply> {
    state.session.insert_key(text)?;
    submit(state)
}

/// Submit the input buffer.
pub fn submit(state: &mut AppState) -> Result<Reply> {
    let submission = state.transition(|session, _, _| session.submit_input())?;
    let settings = state.settings();

    Ok(match submission {
        Submission::EnterAnswer => Reply::text(display::enter_an_answer())
            .then(FollowUp::Redraw(settings.notice_delay())),
        Submission::Graded(feedback) => Reply::text(display::feedback(&feedback))
            .then(FollowUp::Advance(settings.feedback_delay())),
    })
}

/// Move on once feedback has been shown. Returns the next screen.
pub fn advance(state: &mut AppState) -> Result<String> {
    state.transition(|session, _, _| session.advance().map(|next| (next, ())))?;
    Ok(display::screen(&state.session, &state.curriculum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::lesson;
    use crate::error::AppError;
    use greek_drill_core::{Category, Curriculum, Mode, QuizSettings, SessionError};
    use std::time::Duration;

    fn quiz() -> AppState {
        let mut state = AppState::new(
            Curriculum::bundled().unwrap(),
            QuizSettings::default(),
            Some(9),
        );
        lesson::start(&mut state, Category::Declension, 1).unwrap();
        state
    }

    fn expected(state: &AppState) -> String {
        state.session.current_question().unwrap().answer.clone()
    }

    #[test]
    fn correct_answer_schedules_advance() {
        let mut state = quiz();
        let answer_text = expected(&state);
        let reply = answer(&mut state, &answer_text).unwrap();
        assert_eq!(reply.output, "✨ Ἄριστα! (Excellent!)");
        assert_eq!(reply.follow_up, Some(FollowUp::Advance(Duration::from_millis(2500))));

        let next = advance(&mut state).unwrap();
        assert!(next.contains("Question 2 of 5"));
        assert!(next.contains("Score: 10  Streak: 1"));
    }

    #[test]
    fn empty_submit_shows_notice() {
        let mut state = quiz();
        let reply = submit(&mut state).unwrap();
        assert!(reply.output.starts_with("Enter an answer!"));
        assert_eq!(reply.follow_up, Some(FollowUp::Redraw(Duration::from_millis(2000))));
        assert_eq!(state.session.scoreboard().answered(), 0);
    }

    #[test]
    fn wrong_answer_shows_correct_form() {
        let mut state = quiz();
        let reply = answer(&mut state, "qqq").unwrap();
        assert!(reply.output.starts_with("Not quite! The answer is: "));
        assert_eq!(state.session.scoreboard().streak, 0);
    }

    #[test]
    fn answering_from_menu_fails() {
        let mut state = quiz();
        lesson::menu(&mut state);
        let err = answer(&mut state, "λόγος").unwrap_err();
        assert!(matches!(err, AppError::Session(SessionError::NotInQuiz)));
        assert_eq!(state.session.mode(), Mode::Menu);
    }

    #[test]
    fn advance_without_feedback_fails() {
        let mut state = quiz();
        assert!(matches!(
            advance(&mut state),
            Err(AppError::Session(SessionError::NothingToAdvance))
        ));
    }
}
