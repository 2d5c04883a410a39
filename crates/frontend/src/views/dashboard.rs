use payflow_frontend_common::{api_client, ErrorBanner, Spinner};
use payflow_http::types::LogEntry;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let logs = use_state(|| Option::<Result<Vec<LogEntry>, String>>::None);

    {
        let logs = logs.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.list_logs().await,
                    Err(e) => Err(e),
                };
                logs.set(Some(result.map_err(|e| e.to_string())));
            });
            || ()
        });
    }

    let body = match &*logs {
        None => html! { <Spinner label="Chargement du journal..." /> },
        Some(Err(message)) => html! { <ErrorBanner message={message.clone()} /> },
        Some(Ok(entries)) if entries.is_empty() => html! {
            <p class="text-slate-500">{"Aucune exécution enregistrée."}</p>
        },
        Some(Ok(entries)) => html! {
            <table class="min-w-full divide-y divide-slate-200 bg-white rounded-lg shadow text-sm">
                <thead class="bg-slate-100 text-left text-xs uppercase text-slate-500">
                    <tr>
                        <th class="px-4 py-2">{"Date"}</th>
                        <th class="px-4 py-2">{"Client"}</th>
                        <th class="px-4 py-2">{"Période"}</th>
                        <th class="px-4 py-2">{"Statut"}</th>
                        <th class="px-4 py-2">{"Message"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-100">
                    {for entries.iter().map(log_row)}
                </tbody>
            </table>
        },
    };

    html! {
        <section>
            <h1 class="text-2xl font-semibold mb-6">{"Journal des transferts"}</h1>
            {body}
        </section>
    }
}

fn log_row(entry: &LogEntry) -> Html {
    let badge = if entry.is_success() {
        "bg-emerald-100 text-emerald-800"
    } else {
        "bg-red-100 text-red-800"
    };

    html! {
        <tr>
            <td class="px-4 py-2 whitespace-nowrap">{entry.execution_time.clone().unwrap_or_default()}</td>
            <td class="px-4 py-2">{entry.client_name.clone().unwrap_or_else(|| entry.client_doc_id.clone())}</td>
            <td class="px-4 py-2">{entry.period.clone()}</td>
            <td class="px-4 py-2">
                <span class={classes!("px-2", "py-0.5", "rounded", "text-xs", badge)}>{entry.status.clone()}</span>
            </td>
            <td class="px-4 py-2 text-slate-600">{entry.message.clone()}</td>
        </tr>
    }
}
