use gloo::timers::future::TimeoutFuture;
use shared::{LoginFlow, LoginForm, SubmitOutcome, LOGIN_SIMULATED_DELAY_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_navigator, Route};
use crate::services::logging::Logger;

fn field_error(error: Option<&String>) -> Html {
    match error {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}

/// Sign-in form.
///
/// Placeholder authentication: credentials are only checked for shape and
/// never sent anywhere. Any username of 3+ characters with a password of 6+
/// characters signs in after a short simulated wait.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let flow = use_state(LoginFlow::new);

    // Already signed in: skip the form
    {
        let redirect = auth.state.login_page_redirect();
        let navigate = navigator.navigate.clone();
        use_effect_with(redirect, move |redirect| {
            if let Some(path) = redirect {
                navigate.emit(Route::from_path(path));
            }
            || ()
        });
    }

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let flow = flow.clone();
        let auth_state = auth.state.clone();
        let login = auth.actions.login.clone();
        let navigate = navigator.navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = LoginForm::new((*username).clone(), (*password).clone());
            let mut next = (*flow).clone();
            let outcome = next.submit(&form);
            flow.set(next.clone());

            let SubmitOutcome::Accepted { username } = outcome else {
                return;
            };

            // Username only; the password never leaves the form
            Logger::info_with_component("login", &format!("Login attempt with: {}", username));

            let mut session = auth_state.clone();
            let login = login.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                TimeoutFuture::new(LOGIN_SIMULATED_DELAY_MS).await;

                if let Some(path) = next.complete(&mut session) {
                    if let Some(username) = session.username() {
                        login.emit(username.to_string());
                    }
                    navigate.emit(Route::from_path(path));
                }
            });
        })
    };

    let submitting = flow.is_submitting();
    let validation = flow.validation();

    html! {
        <section class="login-section">
            <h2>{"Sign in"}</h2>

            <form class="login-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        autocomplete="username"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={submitting}
                    />
                    {field_error(validation.username_error.as_ref())}
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={submitting}
                    />
                    {field_error(validation.password_error.as_ref())}
                </div>

                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    {flow.submit_label()}
                </button>
            </form>
        </section>
    }
}
