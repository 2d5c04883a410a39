//! Client administration: list, edit, save and Odoo connection test

use crate::components::TextField;
use payflow_frontend_common::{api_client, ErrorBanner, Spinner};
use payflow_http::types::{ClientDirectory, ClientProfile, OdooTestRequest, MASKED_PASSWORD};
use yew::prelude::*;

type Getter = fn(&ClientProfile) -> String;
type Setter = fn(&mut ClientProfile, String);

/// Editable fields: label, input type, read, write
const FIELDS: &[(&str, &str, Getter, Setter)] = &[
    ("Nom", "text", |p| p.nom.clone(), |p, v| p.nom = v),
    (
        "Numéro de dossier Silae",
        "text",
        |p| p.numero_dossier_silae.clone(),
        |p, v| p.numero_dossier_silae = v,
    ),
    (
        "Jour de transfert",
        "number",
        |p| p.jour_transfert.to_string(),
        |p, v| p.jour_transfert = v.trim().parse().unwrap_or_default(),
    ),
    ("Hôte Odoo", "text", |p| p.odoo_host.clone(), |p, v| p.odoo_host = v),
    (
        "Base Odoo",
        "text",
        |p| p.database_odoo.clone(),
        |p, v| p.database_odoo = v,
    ),
    ("Login Odoo", "text", |p| p.odoo_login.clone(), |p, v| p.odoo_login = v),
    (
        "Mot de passe Odoo",
        "password",
        |p| p.odoo_password.clone().unwrap_or_default(),
        |p, v| p.odoo_password = if v.is_empty() { None } else { Some(v) },
    ),
    (
        "Journal de paie Odoo",
        "text",
        |p| p.journal_paie_odoo.clone(),
        |p, v| p.journal_paie_odoo = v,
    ),
    (
        "Société Odoo (id)",
        "number",
        |p| p.odoo_company_id.to_string(),
        |p, v| p.odoo_company_id = v.trim().parse().unwrap_or_default(),
    ),
];

/// Outcome of the last save or test, shown under the form
type Notice = Result<String, String>;

#[function_component(Admin)]
pub fn admin() -> Html {
    let clients = use_state(|| Option::<Result<ClientDirectory, String>>::None);
    let reload = use_state(|| 0_u32);
    let doc_id = use_state(String::new);
    let draft = use_state(ClientProfile::default);
    let notice = use_state(|| Option::<Notice>::None);
    let is_busy = use_state(|| false);

    {
        let clients = clients.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.list_clients().await,
                    Err(e) => Err(e),
                };
                clients.set(Some(result.map_err(|e| e.to_string())));
            });
            || ()
        });
    }

    let on_select = {
        let doc_id = doc_id.clone();
        let draft = draft.clone();
        let notice = notice.clone();
        Callback::from(move |(id, profile): (String, ClientProfile)| {
            doc_id.set(id);
            draft.set(profile);
            notice.set(None);
        })
    };

    let on_new = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit((String::new(), ClientProfile::default())))
    };

    let on_doc_id = {
        let doc_id = doc_id.clone();
        Callback::from(move |value: String| doc_id.set(value))
    };

    let on_save = {
        let doc_id = doc_id.clone();
        let draft = draft.clone();
        let notice = notice.clone();
        let reload = reload.clone();
        let is_busy = is_busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = doc_id.trim().to_string();
            if id.is_empty() {
                notice.set(Some(Err("Renseignez l'identifiant du client.".to_string())));
                return;
            }

            let profile = (*draft).clone();
            let notice = notice.clone();
            let reload = reload.clone();
            let is_busy = is_busy.clone();
            is_busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.save_client(&id, &profile).await,
                    Err(e) => Err(e),
                };
                is_busy.set(false);
                match result {
                    Ok(response) => {
                        notice.set(Some(Ok(response.message)));
                        reload.set(*reload + 1);
                    }
                    Err(e) => notice.set(Some(Err(e.to_string()))),
                }
            });
        })
    };

    let on_test = {
        let draft = draft.clone();
        let notice = notice.clone();
        let is_busy = is_busy.clone();
        Callback::from(move |_: MouseEvent| {
            if draft.odoo_password.as_deref() == Some(MASKED_PASSWORD) {
                notice.set(Some(Err(
                    "Saisissez le mot de passe Odoo pour tester la connexion.".to_string(),
                )));
                return;
            }

            let request = OdooTestRequest::from(&*draft);
            let notice = notice.clone();
            let is_busy = is_busy.clone();
            is_busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.test_odoo(&request).await,
                    Err(e) => Err(e),
                };
                is_busy.set(false);
                notice.set(Some(
                    result
                        .map(|r| {
                            format!(
                                "Connexion réussie : {} société(s), {} journal(aux).",
                                r.companies.len(),
                                r.journals.len()
                            )
                        })
                        .map_err(|e| e.to_string()),
                ));
            });
        })
    };

    let list = match &*clients {
        None => html! { <Spinner label="Chargement des clients..." /> },
        Some(Err(message)) => html! { <ErrorBanner message={message.clone()} /> },
        Some(Ok(directory)) => html! {
            <ul class="divide-y divide-slate-100 bg-white rounded-lg shadow">
                {for directory.iter().map(|(id, profile)| {
                    let selected = *id == *doc_id;
                    let onclick = {
                        let on_select = on_select.clone();
                        let entry = (id.clone(), profile.clone());
                        Callback::from(move |_: MouseEvent| on_select.emit(entry.clone()))
                    };
                    html! {
                        <li>
                            <button
                                {onclick}
                                class={classes!(
                                    "w-full", "text-left", "px-4", "py-3", "hover:bg-slate-50",
                                    selected.then_some("bg-emerald-50")
                                )}
                            >
                                <span class="font-medium">{profile.nom.clone()}</span>
                                <span class="block text-xs text-slate-500">{id.clone()}</span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        },
    };

    let fields = FIELDS.iter().map(|&(label, kind, get, set)| {
        let oninput = {
            let draft = draft.clone();
            Callback::from(move |value: String| {
                let mut next = (*draft).clone();
                set(&mut next, value);
                draft.set(next);
            })
        };
        html! {
            <TextField {label} {kind} value={get(&draft)} {oninput} />
        }
    });

    html! {
        <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div>
                <div class="flex items-center justify-between mb-4">
                    <h1 class="text-2xl font-semibold">{"Clients"}</h1>
                    <button onclick={on_new} class="text-sm text-emerald-700 hover:underline">{"Nouveau"}</button>
                </div>
                {list}
            </div>
            <form class="md:col-span-2 bg-white rounded-lg shadow p-6 space-y-4" onsubmit={on_save}>
                <TextField
                    label="Identifiant"
                    value={(*doc_id).clone()}
                    oninput={on_doc_id}
                    placeholder="ex. acme"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {for fields}
                </div>
                if let Some(notice) = (*notice).clone() {
                    {match notice {
                        Ok(message) => html! {
                            <div class="rounded-md border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-800">
                                {message}
                            </div>
                        },
                        Err(message) => html! { <ErrorBanner {message} /> },
                    }}
                }
                <div class="flex gap-3">
                    <button
                        type="submit"
                        disabled={*is_busy}
                        class="px-4 py-2 rounded-md bg-emerald-600 hover:bg-emerald-700 text-white disabled:opacity-50"
                    >
                        {"Enregistrer"}
                    </button>
                    <button
                        type="button"
                        onclick={on_test}
                        disabled={*is_busy}
                        class="px-4 py-2 rounded-md bg-slate-100 hover:bg-slate-200 text-slate-700 disabled:opacity-50"
                    >
                        {"Tester Odoo"}
                    </button>
                </div>
            </form>
        </section>
    }
}
