use yew::prelude::*;

use crate::hooks::{use_auth, use_navigator, Route};
use crate::services::logging::Logger;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = {
        let logout = auth.actions.logout.clone();
        let navigate = navigator.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component("navbar", "User logged out");
            logout.emit(());
            navigate.emit(Route::Login);
        })
    };

    let on_login = {
        let navigate = navigator.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Login))
    };

    html! {
        <nav class="navbar">
            <span class="navbar-brand">{"Finance Tracker"}</span>

            {match auth.state.username() {
                Some(username) => html! {
                    <div class="navbar-user">
                        <span class="navbar-username">{format!("Signed in as {}", username)}</span>
                        <button class="btn btn-secondary" onclick={on_logout}>{"Log out"}</button>
                    </div>
                },
                None => html! {
                    <button class="btn btn-link" onclick={on_login}>{"Sign in"}</button>
                },
            }}
        </nav>
    }
}
