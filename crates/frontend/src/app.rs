use crate::components::{GuardedSwitch, NavBar};
use payflow_frontend_common::AuthProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <div class="min-h-screen bg-slate-50 text-slate-900">
                    <NavBar />
                    <main class="max-w-6xl mx-auto px-6 py-8">
                        <GuardedSwitch />
                    </main>
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}
