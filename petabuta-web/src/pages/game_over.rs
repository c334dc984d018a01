//! Game over: the outcome-colored summary map, final metrics, the share
//! message, and the donation-gated replay button.
//!
//! The 4-digit payment reference is a pure UI gate: any non-empty value
//! enables replay, nothing is verified against a payment system.

use crate::components::map_panel::{MapPanel, summary_legend, summary_shapes};
use crate::components::score_bar::ScoreBar;
use crate::dom;
use petabuta_game::SummaryFeature;
use petabuta_game::constants::{MAX_QUESTIONS, MAX_SCORE};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PAYMENT_REFERENCE_LEN: &str = "4";

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub features: Vec<SummaryFeature>,
    pub question_index: u32,
    pub score: u32,
    pub mistakes: u32,
    pub share_text: String,
    pub on_replay: Callback<()>,
}

/// The replay button unlocks as soon as the reference field is non-empty.
#[must_use]
pub fn replay_enabled(payment_reference: &str) -> bool {
    !payment_reference.is_empty()
}

/// Percent-encode a share message for a tweet intent link.
#[must_use]
pub fn tweet_intent_url(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("https://twitter.com/intent/tweet?text={encoded}")
}

#[function_component(GameOverPage)]
pub fn game_over_page(props: &Props) -> Html {
    let payment_reference = use_state(String::new);

    let on_reference_input = {
        let payment_reference = payment_reference.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                payment_reference.set(input.value());
            }
        })
    };

    let on_replay = {
        let on_replay = props.on_replay.clone();
        Callback::from(move |_: MouseEvent| on_replay.emit(()))
    };

    let on_copy = {
        let text = props.share_text.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = dom::copy_text(&text) {
                log::error!("failed to copy share text: {err}");
            }
        })
    };

    let on_tweet = {
        let url = tweet_intent_url(&props.share_text);
        Callback::from(move |_: MouseEvent| dom::open_in_new_tab(&url))
    };

    let shapes = summary_shapes(&props.features);

    html! {
        <div class="game-over-page">
            <h2>{ "Game Over" }</h2>
            <MapPanel {shapes} legend={summary_legend()} />
            <ScoreBar
                question_index={props.question_index}
                score={props.score}
                mistakes={props.mistakes}
                question_cap={MAX_QUESTIONS}
                score_cap={MAX_SCORE}
            />
            <div class="replay-row">
                <div class="donation-panel">
                    <p>{ "please donasi Rp 5,000 untuk replay game" }</p>
                    <img src="assets/image/qris.svg" alt="QRIS donation code" width="200" />
                </div>
                <div class="share-panel">
                    <label class="answer-field">
                        { "4 dijit terakhir referensi pembayaran QRIS" }
                        <input
                            type="text"
                            maxlength={PAYMENT_REFERENCE_LEN}
                            value={(*payment_reference).clone()}
                            oninput={on_reference_input}
                        />
                    </label>
                    <p class="muted">
                        { "jangan lupa screenshot, copy text dibawah, terus share ke twitter/instagram ya!" }
                    </p>
                    <code class="share-text">{ props.share_text.clone() }</code>
                    <div class="share-actions">
                        <button class="btn-secondary" onclick={on_copy}>{ "copy" }</button>
                        <button class="btn-secondary" onclick={on_tweet}>{ "share ke twitter" }</button>
                    </div>
                    <button
                        class="btn-primary"
                        disabled={!replay_enabled(&payment_reference)}
                        onclick={on_replay}
                    >
                        { "replay" }
                    </button>
                </div>
            </div>
        </div>
    }
}
