//! Route guard
//!
//! Runs before every navigation completes. The only decision is whether a
//! route that requires authentication may be entered without a credential.

use crate::AuthState;
use std::fmt::Debug;
use tracing::debug;

/// Route metadata consulted by the guard
pub trait GuardedRoute: Clone + Debug {
    /// Whether entering this route needs a stored credential
    fn requires_auth(&self) -> bool;

    /// The login route, target of every redirect
    fn login() -> Self;
}

/// Outcome of a guard check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation<R> {
    /// Continue to the requested route
    Proceed(R),
    /// Go somewhere else instead
    Redirect(R),
}

/// Decide whether navigation from `from` to `to` may complete
pub fn before_each<R: GuardedRoute>(to: &R, from: Option<&R>, state: &AuthState) -> Navigation<R> {
    if to.requires_auth() && !state.is_authenticated() {
        debug!(?to, ?from, "Redirecting unauthenticated navigation to login");
        return Navigation::Redirect(R::login());
    }

    debug!(?to, ?from, "Navigation allowed");
    Navigation::Proceed(to.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credential;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Page {
        Login,
        Dashboard,
        Admin,
        About,
    }

    impl GuardedRoute for Page {
        fn requires_auth(&self) -> bool {
            matches!(self, Self::Dashboard | Self::Admin)
        }

        fn login() -> Self {
            Self::Login
        }
    }

    fn authenticated() -> AuthState {
        AuthState::Authenticated(Credential::new("abc123").unwrap())
    }

    #[test]
    fn test_anonymous_protected_route_redirects() {
        let decision = before_each(&Page::Admin, None, &AuthState::Anonymous);
        assert_eq!(decision, Navigation::Redirect(Page::Login));
    }

    #[test]
    fn test_authenticated_protected_route_proceeds() {
        let decision = before_each(&Page::Dashboard, Some(&Page::Login), &authenticated());
        assert_eq!(decision, Navigation::Proceed(Page::Dashboard));
    }

    #[test]
    fn test_public_route_always_proceeds() {
        for state in [AuthState::Anonymous, authenticated()] {
            assert_eq!(
                before_each(&Page::About, Some(&Page::Admin), &state),
                Navigation::Proceed(Page::About)
            );
            assert_eq!(
                before_each(&Page::Login, None, &state),
                Navigation::Proceed(Page::Login)
            );
        }
    }

    #[test]
    fn test_origin_does_not_change_decision() {
        for from in [None, Some(&Page::Login), Some(&Page::Dashboard)] {
            assert_eq!(
                before_each(&Page::Admin, from, &AuthState::Anonymous),
                Navigation::Redirect(Page::Login)
            );
        }
    }
}
