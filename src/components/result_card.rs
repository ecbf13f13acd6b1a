//! Result card and diagnosis block.
//!
//! Renders the current [`ResultCard`] display model. All text goes in as
//! text nodes, so server strings are never interpreted as markup.

use leptos::prelude::*;

use crate::components::severity_label::SeverityLabel;
use crate::report::ResultCard;

#[component]
pub fn ResultCardView(card: RwSignal<ResultCard>) -> impl IntoView {
    let severity_text = Signal::derive(move || card.with(|c| c.severity.clone()));
    let severity_class = Signal::derive(move || card.with(|c| c.severity_class()));

    view! {
        <div class="result-area">
            <style>{include_str!("result_card.css")}</style>

            <div class=move || card.with(|c| c.card_class())>
                <h3>"Prediction"</h3>
                <p class="result-filename">{move || card.with(|c| c.filename.clone())}</p>
                <div class="result-line">
                    <span class="predicted-class">{move || card.with(|c| c.predicted_class.clone())}</span>
                    " "
                    <span class="confidence">{move || card.with(|c| c.confidence.clone())}</span>
                </div>
                <div class="severity-row">
                    <span class="detail-label">"Severity:"</span>
                    <SeverityLabel text=severity_text class=severity_class />
                </div>
            </div>

            <div class="diagnosis-block">
                <h4>"Diagnosis"</h4>
                <p class="diagnosis-text">{move || card.with(|c| c.diagnosis.clone())}</p>
                <h4>"Treatment"</h4>
                <p class="treatment-text">{move || card.with(|c| c.treatment.clone())}</p>
            </div>
        </div>
    }
}
