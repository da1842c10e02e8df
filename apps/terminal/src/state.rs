//! Application state.

use greek_drill_core::{Curriculum, KeyboardPage, QuizSettings, SessionError, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything the command loop needs between lines of input.
pub struct AppState {
    pub curriculum: Curriculum,
    pub session: SessionState,
    pub keyboard: KeyboardPage,
    pub rng: StdRng,
}

impl AppState {
    pub fn new(curriculum: Curriculum, settings: QuizSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            curriculum,
            session: SessionState::menu(settings),
            keyboard: KeyboardPage::default(),
            rng,
        }
    }

    pub fn settings(&self) -> &QuizSettings {
        self.session.settings()
    }

    /// Run a session transition. The current session is kept when it fails.
    pub fn transition<T>(
        &mut self,
        f: impl FnOnce(
            SessionState,
            &Curriculum,
            &mut StdRng,
        ) -> Result<(SessionState, T), SessionError>,
    ) -> Result<T, SessionError> {
        let (next, out) = f(self.session.clone(), &self.curriculum, &mut self.rng)?;
        self.session = next;
        Ok(out)
    }
}
