//! Route table

use crate::views::{Admin, Dashboard, Login, ManualImport, NotFound};
use payflow_core::GuardedRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[at("/manual-import")]
    ManualImport,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl GuardedRoute for Route {
    fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Admin | Self::ManualImport)
    }

    fn login() -> Self {
        Self::Login
    }
}

/// Render the view of a route the guard let through
pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Admin => html! { <Admin /> },
        Route::ManualImport => html! { <ManualImport /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payflow_core::{before_each, AuthConfig, AuthState, Credential, Navigation};

    #[test]
    fn test_paths() {
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
        assert_eq!(Route::recognize("/manual-import"), Some(Route::ManualImport));
    }

    #[test]
    fn test_login_route_matches_redirect_path() {
        assert_eq!(Route::Login.to_path(), AuthConfig::LOGIN_PATH);
    }

    #[test]
    fn test_only_login_and_not_found_are_public() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::NotFound.requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::Admin.requires_auth());
        assert!(Route::ManualImport.requires_auth());
    }

    #[test]
    fn test_anonymous_admin_redirects_to_login() {
        let decision = before_each(&Route::Admin, None, &AuthState::Anonymous);
        assert_eq!(decision, Navigation::Redirect(Route::Login));
    }

    #[test]
    fn test_authenticated_dashboard_proceeds() {
        let state = AuthState::Authenticated(Credential::new("abc123").unwrap());
        let decision = before_each(&Route::Dashboard, Some(&Route::Login), &state);
        assert_eq!(decision, Navigation::Proceed(Route::Dashboard));
    }
}
