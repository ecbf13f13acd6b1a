use leptos::prelude::*;

#[component]
pub fn SeverityLabel(
    /// Severity text as returned by the service, markers included
    #[prop(into)]
    text: Signal<String>,
    /// `severity-label` plus at most one of `high`, `moderate`, `low`
    #[prop(into)]
    class: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || class.get()>{move || text.get()}</span>
    }
}
