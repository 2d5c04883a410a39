use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="text-center py-20">
            <h1 class="text-2xl font-semibold mb-4">{"Page introuvable"}</h1>
            <Link<Route> to={Route::Dashboard} classes="text-emerald-700 hover:underline">
                {"Retour au tableau de bord"}
            </Link<Route>>
        </div>
    }
}
