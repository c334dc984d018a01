//! The answer form: province and capital selectors plus submit and skip.
//! Both selectors enumerate the catalog's choice lists, so an empty or
//! free-text submission is structurally impossible.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub provinces: Vec<String>,
    pub capitals: Vec<String>,
    pub on_submit: Callback<(String, String)>,
    pub on_skip: Callback<()>,
}

fn select_change(selected: UseStateHandle<Option<String>>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            selected.set(Some(select.value()));
        }
    })
}

fn options(choices: &[String], selected: Option<&str>) -> Html {
    choices
        .iter()
        .map(|choice| {
            let is_selected = selected.is_some_and(|s| s == choice);
            html! {
                <option value={choice.clone()} selected={is_selected}>{ choice.clone() }</option>
            }
        })
        .collect()
}

#[function_component(AnswerForm)]
pub fn answer_form(props: &Props) -> Html {
    // Selectors default to the first choice, like a plain <select> does.
    let province = use_state(|| None::<String>);
    let capital = use_state(|| None::<String>);

    let chosen_province = (*province)
        .clone()
        .or_else(|| props.provinces.first().cloned());
    let chosen_capital = (*capital)
        .clone()
        .or_else(|| props.capitals.first().cloned());

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let chosen_province = chosen_province.clone();
        let chosen_capital = chosen_capital.clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(p), Some(c)) = (chosen_province.clone(), chosen_capital.clone()) {
                on_submit.emit((p, c));
            }
        })
    };

    let on_skip = {
        let on_skip = props.on_skip.clone();
        Callback::from(move |_: MouseEvent| on_skip.emit(()))
    };

    html! {
        <div class="answer-form">
            <div class="answer-columns">
                <label class="answer-field">
                    { "Apa nama provinsi berwarna merah?" }
                    <select onchange={select_change(province.clone())}>
                        { options(&props.provinces, chosen_province.as_deref()) }
                    </select>
                </label>
                <label class="answer-field">
                    { "Apa nama ibukotanya?" }
                    <select onchange={select_change(capital.clone())}>
                        { options(&props.capitals, chosen_capital.as_deref()) }
                    </select>
                </label>
            </div>
            <button class="btn-primary" onclick={on_submit}>{ "submit jawaban" }</button>
            <button class="btn-secondary" onclick={on_skip}>{ "Skip question" }</button>
        </div>
    }
}
