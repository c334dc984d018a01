pub mod answer_form;
pub mod feedback_alert;
pub mod map_panel;
pub mod score_bar;
