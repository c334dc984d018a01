use petabuta_game::{Feedback, QuizSession};
use yew::prelude::*;

/// Top-level UI state. The session is built once, in the state hook's
/// initializer, so the question permutation is fixed for the life of the
/// page; every later render reads the same catalog.
#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<Result<QuizSession, anyhow::Error>>,
    pub feedback: UseStateHandle<Option<Feedback>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(|| crate::game::build_session(crate::game::session_seed())),
        feedback: use_state(|| None),
    }
}
