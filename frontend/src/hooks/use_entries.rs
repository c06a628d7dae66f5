use shared::{Entry, NewEntry};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{api::ApiClient, logging::Logger};

#[derive(Clone, PartialEq)]
pub struct EntriesState {
    pub entries: Vec<Entry>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
}

pub struct UseEntriesResult {
    pub state: EntriesState,
    pub actions: UseEntriesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEntriesActions {
    pub refresh: Callback<()>,
    pub create_entry: Callback<NewEntry>,
}

#[hook]
pub fn use_entries(api_client: &ApiClient) -> UseEntriesResult {
    let entries = use_state(Vec::<Entry>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let entries = entries.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let entries = entries.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_entries().await {
                    Ok(range) => {
                        entries.set(range.entries());
                        load_error.set(None);
                    }
                    Err(e) => {
                        Logger::warn_with_component("entries", &format!("Failed to load entries: {}", e));
                        load_error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    let create_entry = {
        let api_client = api_client.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let refresh = refresh.clone();

        use_callback((), move |entry: NewEntry, _| {
            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                submitting.set(true);
                form_error.set(None);
                form_success.set(false);

                match api_client.create_entry(entry).await {
                    Ok(()) => {
                        form_success.set(true);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("entries", &format!("Failed to create entry: {}", e));
                        form_error.set(Some(e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseEntriesResult {
        state: EntriesState {
            entries: (*entries).clone(),
            loading: *loading,
            load_error: (*load_error).clone(),
            submitting: *submitting,
            form_error: (*form_error).clone(),
            form_success: *form_success,
        },
        actions: UseEntriesActions {
            refresh,
            create_entry,
        },
    }
}
