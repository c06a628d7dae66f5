use std::rc::Rc;

use shared::AuthState;
use yew::prelude::*;

/// Session state of the browser tab.
///
/// Lives in memory only: a reload signs the user out. Nothing here is
/// checked by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    pub state: AuthState,
}

pub enum AuthAction {
    Login(String),
    Logout,
}

impl Reducible for AuthSession {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            AuthAction::Login(username) => state.login(username),
            AuthAction::Logout => state.logout(),
        }
        Rc::new(Self { state })
    }
}

pub type AuthContext = UseReducerHandle<AuthSession>;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let session = use_reducer(AuthSession::default);

    html! {
        <ContextProvider<AuthContext> context={session}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

pub struct UseAuthResult {
    pub state: AuthState,
    pub actions: UseAuthActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthActions {
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthResult {
    // Outside an AuthProvider the component gets a private, signed-out session
    let detached = use_reducer(AuthSession::default);
    let session = use_context::<AuthContext>().unwrap_or(detached);

    let login = {
        let session = session.clone();
        use_callback((), move |username: String, _| {
            session.dispatch(AuthAction::Login(username));
        })
    };

    let logout = {
        let session = session.clone();
        use_callback((), move |_: (), _| {
            session.dispatch(AuthAction::Logout);
        })
    };

    UseAuthResult {
        state: session.state.clone(),
        actions: UseAuthActions { login, logout },
    }
}
