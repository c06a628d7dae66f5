use serde_json::Value;
use shared::NewEntry;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
    pub on_submit: Callback<NewEntry>,
}

/// Blank inputs are sent as absent fields
fn optional(value: &str) -> Option<Value> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| Value::from(trimmed))
}

/// Parse the amount field; `Ok(None)` when left blank
fn parse_value(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| format!("\"{}\" is not a valid amount.", trimmed))
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

fn select_change(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let date = use_state(String::new);
    let category = use_state(String::new);
    let description = use_state(String::new);
    let status = use_state(|| "pending".to_string());
    let entry_type = use_state(|| "expense".to_string());
    let value = use_state(String::new);
    let value_error = use_state(|| Option::<String>::None);

    let on_submit = {
        let date = date.clone();
        let category = category.clone();
        let description = description.clone();
        let status = status.clone();
        let entry_type = entry_type.clone();
        let value = value.clone();
        let value_error = value_error.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed = match parse_value(&value) {
                Ok(parsed) => parsed,
                Err(message) => {
                    value_error.set(Some(message));
                    return;
                }
            };
            value_error.set(None);

            on_submit.emit(NewEntry {
                date: optional(&date),
                category: optional(&category),
                description: optional(&description),
                status: optional(&status),
                entry_type: optional(&entry_type),
                value: parsed.map(Value::from),
            });
        })
    };

    html! {
        <section class="entry-form-section">
            <h2>{"New Entry"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if props.form_success {
                html! { <div class="form-message success">{"Entry saved."}</div> }
            } else { html! {} }}

            <form class="entry-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input type="date" id="date" value={(*date).clone()}
                        oninput={text_input(&date)} disabled={props.submitting} />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <input type="text" id="category" placeholder="Groceries, rent, salary..."
                        value={(*category).clone()}
                        oninput={text_input(&category)} disabled={props.submitting} />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <input type="text" id="description" value={(*description).clone()}
                        oninput={text_input(&description)} disabled={props.submitting} />
                </div>

                <div class="form-group">
                    <label for="status">{"Status"}</label>
                    <select id="status" onchange={select_change(&status)} disabled={props.submitting}>
                        <option value="pending" selected={*status == "pending"}>{"Pending"}</option>
                        <option value="paid" selected={*status == "paid"}>{"Paid"}</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select id="type" onchange={select_change(&entry_type)} disabled={props.submitting}>
                        <option value="expense" selected={*entry_type == "expense"}>{"Expense"}</option>
                        <option value="income" selected={*entry_type == "income"}>{"Income"}</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="value">{"Value"}</label>
                    <input type="number" id="value" step="0.01" placeholder="0.00"
                        value={(*value).clone()}
                        oninput={text_input(&value)} disabled={props.submitting} />
                    {if let Some(error) = (*value_error).as_ref() {
                        html! { <div class="field-error">{error}</div> }
                    } else { html! {} }}
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Saving..." } else { "Add Entry" }}
                </button>
            </form>
        </section>
    }
}
