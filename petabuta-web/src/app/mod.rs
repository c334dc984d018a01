pub mod state;

use crate::pages::{GameOverPage, PlayPage};
use petabuta_game::{QuizEvent, QuizSession};
use state::{AppState, use_app_state};
use yew::prelude::*;

/// Route one player event into the session held by the state handle.
/// Submissions update the feedback banner; skip and replay clear it.
fn dispatch(state: &AppState, event: QuizEvent) {
    let Ok(session) = &*state.session else {
        return;
    };
    let mut next = session.clone();
    match next.apply(event) {
        Ok(feedback) => {
            state.feedback.set(feedback);
            state.session.set(Ok(next));
        }
        // Only reachable if a submission arrives past the end of the
        // catalog, which the is_active gate prevents.
        Err(err) => log::error!("event rejected: {err}"),
    }
}

fn render_session(state: &AppState, session: &QuizSession) -> Html {
    let on_submit = {
        let state = state.clone();
        Callback::from(move |(province, capital): (String, String)| {
            dispatch(&state, QuizEvent::Submit { province, capital });
        })
    };
    let on_skip = {
        let state = state.clone();
        Callback::from(move |()| dispatch(&state, QuizEvent::Skip))
    };
    let on_replay = {
        let state = state.clone();
        Callback::from(move |()| dispatch(&state, QuizEvent::Replay))
    };

    let quiz = session.state();
    if session.is_active() {
        html! {
            <PlayPage
                features={session.map_features()}
                provinces={session.province_choices()}
                capitals={session.capital_choices().to_vec()}
                question_index={quiz.question_index}
                score={quiz.score}
                mistakes={quiz.mistakes}
                feedback={(*state.feedback).clone()}
                {on_submit}
                {on_skip}
            />
        }
    } else {
        html! {
            <GameOverPage
                features={session.summary_features()}
                question_index={quiz.question_index}
                score={quiz.score}
                mistakes={quiz.mistakes}
                share_text={session.share_text()}
                {on_replay}
            />
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_app_state();

    let body = match &*state.session {
        Ok(session) => render_session(&state, session),
        // Reference data failed to load; fatal, nothing to retry.
        Err(message) => html! {
            <div class="alert alert-error" role="alert">
                { format!("Gagal memuat data peta: {message}") }
            </div>
        },
    };

    html! {
        <main id="main" role="main">
            <h1 class="app-title">{ "Peta Buta Indonesia" }</h1>
            { body }
        </main>
    }
}
