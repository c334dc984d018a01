//! Active play: the highlighted map, the answer form, and the metrics row.

use crate::components::answer_form::AnswerForm;
use crate::components::feedback_alert::FeedbackAlert;
use crate::components::map_panel::{MapPanel, status_shapes};
use crate::components::score_bar::ScoreBar;
use petabuta_game::constants::{DISPLAY_QUESTION_CAP, DISPLAY_SCORE_CAP};
use petabuta_game::{Feedback, StatusFeature};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub features: Vec<StatusFeature>,
    pub provinces: Vec<String>,
    pub capitals: Vec<String>,
    pub question_index: u32,
    pub score: u32,
    pub mistakes: u32,
    #[prop_or_default]
    pub feedback: Option<Feedback>,
    pub on_submit: Callback<(String, String)>,
    pub on_skip: Callback<()>,
}

#[function_component(PlayPage)]
pub fn play_page(props: &Props) -> Html {
    let shapes = status_shapes(&props.features);

    html! {
        <div class="play-page">
            <MapPanel {shapes} />
            {
                props.feedback.as_ref().map_or_else(Html::default, |feedback| html! {
                    <FeedbackAlert feedback={feedback.clone()} />
                })
            }
            <AnswerForm
                provinces={props.provinces.clone()}
                capitals={props.capitals.clone()}
                on_submit={props.on_submit.clone()}
                on_skip={props.on_skip.clone()}
            />
            <ScoreBar
                question_index={props.question_index}
                score={props.score}
                mistakes={props.mistakes}
                question_cap={DISPLAY_QUESTION_CAP}
                score_cap={DISPLAY_SCORE_CAP}
            />
        </div>
    }
}
