//! Manual import of selected months for one client

use crate::components::TextField;
use payflow_frontend_common::{api_client, ErrorBanner, Spinner};
use payflow_http::types::{ClientDirectory, ManualImportRequest, PeriodResult};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Parse a list of `YYYY-MM` months separated by commas or whitespace.
///
/// Duplicates are dropped, first occurrence wins.
pub fn parse_periods(input: &str) -> Result<Vec<String>, String> {
    let mut periods: Vec<String> = Vec::new();

    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        if !is_month(token) {
            return Err(format!("Période invalide : {token} (format attendu AAAA-MM)"));
        }
        if !periods.iter().any(|p| p == token) {
            periods.push(token.to_string());
        }
    }

    if periods.is_empty() {
        return Err("Indiquez au moins une période.".to_string());
    }
    Ok(periods)
}

fn is_month(token: &str) -> bool {
    let Some((year, month)) = token.split_once('-') else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 {
        return false;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

#[function_component(ManualImport)]
pub fn manual_import() -> Html {
    let clients = use_state(|| Option::<Result<ClientDirectory, String>>::None);
    let client_doc_id = use_state(String::new);
    let periods = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let results = use_state(|| Option::<Vec<PeriodResult>>::None);
    let is_running = use_state(|| false);

    {
        let clients = clients.clone();
        let client_doc_id = client_doc_id.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.list_clients().await,
                    Err(e) => Err(e),
                };
                if let Ok(directory) = &result {
                    if let Some(first) = directory.keys().next() {
                        client_doc_id.set(first.clone());
                    }
                }
                clients.set(Some(result.map_err(|e| e.to_string())));
            });
            || ()
        });
    }

    let on_client = {
        let client_doc_id = client_doc_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            client_doc_id.set(select.value());
        })
    };

    let on_periods = {
        let periods = periods.clone();
        Callback::from(move |value: String| periods.set(value))
    };

    let on_submit = {
        let client_doc_id = client_doc_id.clone();
        let periods = periods.clone();
        let error = error.clone();
        let results = results.clone();
        let is_running = is_running.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if client_doc_id.is_empty() {
                error.set(Some("Choisissez un client.".to_string()));
                return;
            }
            let parsed = match parse_periods(&periods) {
                Ok(parsed) => parsed,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let request = ManualImportRequest {
                client_doc_id: (*client_doc_id).clone(),
                periods: parsed,
            };
            let error = error.clone();
            let results = results.clone();
            let is_running = is_running.clone();
            error.set(None);
            results.set(None);
            is_running.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.manual_import(&request).await,
                    Err(e) => Err(e),
                };
                is_running.set(false);
                match result {
                    Ok(response) => results.set(Some(response.results)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let picker = match &*clients {
        None => html! { <Spinner label="Chargement des clients..." /> },
        Some(Err(message)) => html! { <ErrorBanner message={message.clone()} /> },
        Some(Ok(directory)) => html! {
            <label class="block">
                <span class="block text-sm font-medium text-slate-700 mb-1">{"Client"}</span>
                <select
                    class="block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                    onchange={on_client}
                >
                    {for directory.iter().map(|(id, profile)| html! {
                        <option value={id.clone()} selected={*id == *client_doc_id}>
                            {format!("{} ({id})", profile.nom)}
                        </option>
                    })}
                </select>
            </label>
        },
    };

    html! {
        <section class="max-w-2xl">
            <h1 class="text-2xl font-semibold mb-6">{"Import manuel"}</h1>
            <form class="bg-white rounded-lg shadow p-6 space-y-4" onsubmit={on_submit}>
                {picker}
                <TextField
                    label="Périodes"
                    value={(*periods).clone()}
                    oninput={on_periods}
                    placeholder="2024-01, 2024-02"
                />
                if let Some(message) = (*error).clone() {
                    <ErrorBanner {message} />
                }
                <button
                    type="submit"
                    disabled={*is_running}
                    class="px-4 py-2 rounded-md bg-emerald-600 hover:bg-emerald-700 text-white disabled:opacity-50"
                >
                    {if *is_running { "Import en cours..." } else { "Lancer l'import" }}
                </button>
            </form>
            if let Some(results) = (*results).clone() {
                <ul class="mt-6 space-y-2">
                    {for results.iter().map(|r| html! {
                        <li class={classes!(
                            "rounded-md", "px-4", "py-2", "text-sm",
                            if r.is_success() { "bg-emerald-50 text-emerald-800" } else { "bg-red-50 text-red-800" }
                        )}>
                            <span class="font-medium">{r.period.clone()}</span>
                            {" : "}
                            {r.message.clone()}
                        </li>
                    })}
                </ul>
            }
        </section>
    }
}
