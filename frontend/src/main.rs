use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{EntriesPage, LoginPage, Navbar};
use hooks::{use_auth, use_navigator, AuthProvider, Route, RouteProvider};
use services::{api::ApiClient, logging::Logger};
use wasm_bindgen_futures::spawn_local;

/// Picks the page for the current route. The entries page needs a signed-in
/// session; anyone else is sent to the login page.
#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let authenticated = auth.state.is_authenticated();

    {
        let navigate = navigator.navigate.clone();
        use_effect_with((navigator.route, authenticated), move |(route, authenticated)| {
            if *route == Route::Entries && !*authenticated {
                navigate.emit(Route::Login);
            }
            || ()
        });
    }

    let page = match navigator.route {
        Route::Entries if authenticated => html! { <EntriesPage /> },
        _ => html! { <LoginPage /> },
    };

    html! {
        <div class="app">
            <Navbar />
            <main class="content">
                {page}
            </main>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), |_| {
        spawn_local(async {
            match ApiClient::new().test_connection().await {
                Ok(()) => Logger::debug_with_component("app", "Frontend started, backend reachable"),
                Err(e) => gloo::console::warn!("Backend not reachable:", e),
            }
        });
        || ()
    });

    html! {
        <AuthProvider>
            <RouteProvider>
                <Shell />
            </RouteProvider>
        </AuthProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
