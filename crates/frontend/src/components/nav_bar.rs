use crate::routes::Route;
use payflow_frontend_common::{use_auth, use_is_authenticated, AuthAction};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let auth = use_auth();
    let is_authenticated = use_is_authenticated();
    let navigator = use_navigator();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.dispatch(AuthAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <header class="bg-white border-b border-slate-200">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <span class="text-xl font-bold text-emerald-700">{"PayFlow"}</span>
                if is_authenticated {
                    <nav class="flex items-center gap-6 text-sm">
                        <Link<Route> to={Route::Dashboard} classes="text-slate-600 hover:text-slate-900">{"Journal"}</Link<Route>>
                        <Link<Route> to={Route::Admin} classes="text-slate-600 hover:text-slate-900">{"Clients"}</Link<Route>>
                        <Link<Route> to={Route::ManualImport} classes="text-slate-600 hover:text-slate-900">{"Import manuel"}</Link<Route>>
                        <button
                            onclick={on_logout}
                            class="px-3 py-1.5 rounded-md bg-slate-100 hover:bg-slate-200 text-slate-700"
                        >
                            {"Déconnexion"}
                        </button>
                    </nav>
                }
            </div>
        </header>
    }
}
