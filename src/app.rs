use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ClientConfig;
use crate::pages::diagnose::DiagnosePage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ClientConfig::from_build_env());

    view! {
        <Router>
            <div class="app-layout">
                <header class="app-header">
                    <h1 class="app-title">"LeafScan"</h1>
                    <p class="app-subtitle">"Plant Disease Detection"</p>
                </header>
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=DiagnosePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
