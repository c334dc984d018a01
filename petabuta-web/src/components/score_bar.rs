//! The three labeled metrics: question number, score, mistake count.

use petabuta_game::constants::MISTAKE_LIMIT;
use yew::prelude::*;

#[derive(Properties, Clone, Copy, PartialEq, Eq)]
pub struct Props {
    pub question_index: u32,
    pub score: u32,
    pub mistakes: u32,
    /// Display cap shown next to the question metric; the play view shows
    /// the intended run length, the game-over view the hard budget.
    pub question_cap: u32,
    pub score_cap: u32,
}

fn metric(label: String, value: u32) -> Html {
    html! {
        <div class="metric">
            <p class="metric-label">{ label }</p>
            <p class="metric-value">{ value }</p>
        </div>
    }
}

#[function_component(ScoreBar)]
pub fn score_bar(p: &Props) -> Html {
    html! {
        <div class="score-bar">
            { metric(format!("Questions Number: (max:{})", p.question_cap), p.question_index) }
            { metric(format!("Score: (max={})", p.score_cap), p.score) }
            { metric(format!("Mistakes: (max={MISTAKE_LIMIT})"), p.mistakes) }
        </div>
    }
}
