//! Lesson selection and navigation commands.

use super::Reply;
use crate::display;
use crate::error::Result;
use crate::state::AppState;
use greek_drill_core::{Category, SessionState};

/// Start a lesson from the curriculum.
pub fn start(state: &mut AppState, category: Category, id: u32) -> Result<Reply> {
    state.transition(|session, curriculum, rng| {
        let settings = session.settings().clone();
        SessionState::select_lesson(curriculum, category, id, &settings, rng).map(|next| (next, ()))
    })?;
    Ok(Reply::text(opening_screen(state)))
}

/// Start the next vocabulary round.
pub fn continue_round(state: &mut AppState) -> Result<Reply> {
    state.transition(|session, _, rng| session.continue_to_next_round(rng).map(|next| (next, ())))?;
    Ok(Reply::text(display::question(&state.session)))
}

/// Restart the current lesson.
pub fn again(state: &mut AppState) -> Result<Reply> {
    state.transition(|session, _, rng| session.practice_again(rng).map(|next| (next, ())))?;
    Ok(Reply::text(opening_screen(state)))
}

pub fn menu(state: &mut AppState) -> Reply {
    state.session = state.session.clone().return_to_menu();
    Reply::text(display::menu(&state.curriculum))
}

fn opening_screen(state: &AppState) -> String {
    match state.session.lesson() {
        Some(lesson) => format!(
            "{}\n\n{}",
            display::lesson_intro(lesson),
            display::question(&state.session)
        ),
        None => display::question(&state.session),
    }
}
