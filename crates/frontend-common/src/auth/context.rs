//! Global authentication context and provider
//!
//! The context mirrors [`Session`](payflow_core::Session) so components
//! re-render on login and logout. The session stays the source of truth.

use crate::client::session;
use crate::navigation::{clear_session_listener, set_session_listener};
use payflow_core::{AuthState, Credential};
use std::rc::Rc;
use tracing::warn;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub state: AuthState,
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    /// The server accepted this credential
    Login(Credential),
    /// The user asked to leave
    Logout,
    /// The session changed underneath the context
    Refresh,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            state: session().state(),
            error: None,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = session();
        match action {
            AuthAction::Login(credential) => {
                let error = session.login(&credential).err().map(|e| {
                    warn!("Failed to store credential: {e}");
                    format!("Could not remember the password: {e}")
                });
                Rc::new(Self {
                    state: session.state(),
                    error,
                })
            }
            AuthAction::Logout => {
                if let Err(e) = session.logout() {
                    warn!("Failed to clear credential: {e}");
                }
                Rc::new(Self {
                    state: session.state(),
                    error: None,
                })
            }
            AuthAction::Refresh => {
                let state = session.state();
                if state == self.state {
                    return self;
                }
                Rc::new(Self {
                    state,
                    error: self.error.clone(),
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Follow logouts triggered by the HTTP client
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            set_session_listener(Rc::new(move || {
                auth_state.dispatch(AuthAction::Refresh);
            }));

            // Cleanup on unmount
            move || {
                clear_session_listener();
            }
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.state.is_authenticated()
}
