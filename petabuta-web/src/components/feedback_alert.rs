//! Per-turn feedback banner, styled by severity.

use petabuta_game::{Feedback, FeedbackKind};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub feedback: Feedback,
}

#[must_use]
pub const fn alert_class(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Success => "alert alert-success",
        FeedbackKind::Warning => "alert alert-warning",
        FeedbackKind::Error => "alert alert-error",
    }
}

#[function_component(FeedbackAlert)]
pub fn feedback_alert(props: &Props) -> Html {
    html! {
        <div class={alert_class(props.feedback.kind)} role="status" aria-live="polite">
            { props.feedback.message.clone() }
        </div>
    }
}
