use yew::prelude::*;

use super::{EntryForm, EntryTable};
use crate::hooks::use_entries;
use crate::services::api::ApiClient;

#[function_component(EntriesPage)]
pub fn entries_page() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let entries = use_entries(&api_client);

    let on_refresh = {
        let refresh = entries.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="entries-page">
            <EntryForm
                submitting={entries.state.submitting}
                form_error={entries.state.form_error.clone()}
                form_success={entries.state.form_success}
                on_submit={entries.actions.create_entry.clone()}
            />

            <div class="entries-toolbar">
                <button class="btn btn-secondary" onclick={on_refresh} disabled={entries.state.loading}>
                    {"Refresh"}
                </button>
            </div>

            <EntryTable
                entries={entries.state.entries.clone()}
                loading={entries.state.loading}
                error={entries.state.load_error.clone()}
            />
        </div>
    }
}
