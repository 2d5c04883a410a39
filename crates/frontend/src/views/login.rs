//! Login view, the only writer of the stored credential

use crate::components::TextField;
use crate::routes::Route;
use payflow_core::Credential;
use payflow_frontend_common::{api_client, use_auth, AuthAction, ErrorBanner};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_submit = {
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(credential) = Credential::new((*password).clone()) else {
                error.set(Some("Saisissez le mot de passe.".to_string()));
                return;
            };

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.login(credential.as_str()).await,
                    Err(e) => Err(e),
                };
                is_submitting.set(false);

                match result {
                    Ok(_) => {
                        auth.dispatch(AuthAction::Login(credential));
                        error.set(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) if e.is_unauthorized() => {
                        error.set(Some("Mot de passe incorrect.".to_string()));
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-sm mx-auto mt-16 bg-white rounded-xl shadow p-8">
            <h1 class="text-2xl font-semibold mb-6">{"Connexion"}</h1>
            <form class="space-y-4" onsubmit={on_submit}>
                <TextField
                    label="Mot de passe"
                    kind="password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                if let Some(message) = (*error).clone() {
                    <ErrorBanner {message} />
                }
                <button
                    type="submit"
                    disabled={*is_submitting}
                    class="w-full py-2 rounded-md bg-emerald-600 hover:bg-emerald-700 text-white font-medium disabled:opacity-50"
                >
                    {if *is_submitting { "Connexion..." } else { "Se connecter" }}
                </button>
            </form>
        </div>
    }
}
