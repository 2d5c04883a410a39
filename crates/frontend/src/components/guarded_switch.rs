//! Router switch with the authentication guard applied

use crate::routes::{switch, Route};
use payflow_core::{before_each, Navigation};
use payflow_frontend_common::{session, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

/// Renders the current route, or redirects to login when the guard refuses it.
///
/// The guard runs on every route change and every session change.
#[function_component(GuardedSwitch)]
pub fn guarded_switch() -> Html {
    // Subscribing to the auth context re-runs the guard after login and logout
    let _auth = use_auth();
    let previous = use_mut_ref(|| None::<Route>);
    let target = use_route::<Route>().unwrap_or(Route::NotFound);

    let decision = before_each(&target, previous.borrow().as_ref(), &session().state());

    {
        let previous = previous.clone();
        use_effect_with(decision.clone(), move |decision| {
            if let Navigation::Proceed(route) = decision {
                *previous.borrow_mut() = Some(route.clone());
            }
            || ()
        });
    }

    match decision {
        Navigation::Proceed(route) => switch(route),
        Navigation::Redirect(route) => html! { <Redirect<Route> to={route} /> },
    }
}
