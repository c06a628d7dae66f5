use gloo::events::EventListener;
use shared::HOME_ROUTE;
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Entries,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Entries => HOME_ROUTE,
            Route::Login => LOGIN_ROUTE,
        }
    }

    /// Unknown paths fall back to the entries page
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == LOGIN_ROUTE {
            Route::Login
        } else {
            Route::Entries
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub route: Route,
    pub navigate: Callback<Route>,
}

#[derive(Properties, PartialEq)]
pub struct RouteProviderProps {
    #[prop_or_default]
    pub children: Children,
}

fn current_path() -> Option<String> {
    web_sys::window().and_then(|window| window.location().pathname().ok())
}

/// Route for the browser location; no location means the entries page
fn route_for_location(path: Option<&str>) -> Route {
    path.map(Route::from_path).unwrap_or(Route::Entries)
}

fn push_path(path: &str) {
    let pushed = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| window.history())
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));

    if let Err(e) = pushed {
        gloo::console::warn!("Failed to update browser history:", e);
    }
}

#[function_component(RouteProvider)]
pub fn route_provider(props: &RouteProviderProps) -> Html {
    let route = use_state(|| route_for_location(current_path().as_deref()));

    // Back/forward only changes the URL; follow it
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    route.set(route_for_location(current_path().as_deref()));
                })
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let route = route.clone();
        use_callback((), move |next: Route, _| {
            push_path(next.path());
            route.set(next);
        })
    };

    let navigator = Navigator {
        route: *route,
        navigate,
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            {props.children.clone()}
        </ContextProvider<Navigator>>
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    let fallback = use_state(|| Route::Entries);
    let fallback_navigate = {
        let fallback = fallback.clone();
        use_callback((), move |next: Route, _| fallback.set(next))
    };

    use_context::<Navigator>().unwrap_or(Navigator {
        route: *fallback,
        navigate: fallback_navigate,
    })
}
