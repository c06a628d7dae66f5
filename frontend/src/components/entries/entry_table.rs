use shared::{display_cell, Entry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryTableProps {
    pub entries: Vec<Entry>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Ids are not guaranteed unique in the sheet, so the row position is part
/// of the key
fn row_key(index: usize, entry: &Entry) -> String {
    format!("{}-{}", index, entry.id)
}

fn value_class(entry: &Entry) -> &'static str {
    match entry.type_label() {
        Some("income") => "amount positive",
        Some("expense") => "amount negative",
        _ => "amount",
    }
}

#[function_component(EntryTable)]
pub fn entry_table(props: &EntryTableProps) -> Html {
    html! {
        <section class="entries-section">
            <h2>{"Entries"}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if props.loading {
                html! { <div class="loading">{"Loading entries..."}</div> }
            } else if props.entries.is_empty() {
                html! { <div class="empty">{"No entries yet."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="entries-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Value"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.entries.iter().enumerate().map(|(index, entry)| {
                                    html! {
                                        <tr key={row_key(index, entry)}>
                                            <td class="date">{display_cell(&entry.date)}</td>
                                            <td class="category">{display_cell(&entry.category)}</td>
                                            <td class="description">{display_cell(&entry.description)}</td>
                                            <td class="status">{display_cell(&entry.status)}</td>
                                            <td class="type">{display_cell(&entry.entry_type)}</td>
                                            <td class={value_class(entry)}>
                                                {entry
                                                    .amount()
                                                    .map(|v| format!("{:.2}", v))
                                                    .unwrap_or_else(|| display_cell(&entry.value))}
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
