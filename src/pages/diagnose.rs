//! Leaf diagnosis page.
//!
//! Pick a photo, send it to the prediction service, and read the verdict in
//! the result card. Successful predictions accumulate in the history table.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, PredictOutcome};
use crate::browser;
use crate::components::history_table::HistoryTable;
use crate::components::image_picker::ImagePicker;
use crate::components::result_card::ResultCardView;
use crate::config::ClientConfig;
use crate::view_model::DiagnoseView;

#[component]
pub fn DiagnosePage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let max_upload_bytes = config.max_upload_bytes;
    let config = StoredValue::new(config);

    let diagnose: DiagnoseView = DiagnoseView::new();

    let on_submit = move |_| {
        let (file, guard) = match diagnose.begin_submit() {
            Ok(started) => started,
            Err(rejection) => {
                if let Some(msg) = rejection.alert_message() {
                    browser::alert(msg);
                }
                return;
            }
        };

        let config = config.get_value();
        spawn_local(async move {
            let _guard = guard;
            let outcome = api::predict(&config, file).await;

            if let PredictOutcome::TransportError(ref e) = outcome {
                log::error!("Prediction failed: {}", e);
            }
            if let Some(msg) = outcome.alert_message() {
                browser::alert(&msg);
            }
            diagnose.apply_outcome(&outcome);
        });
    };

    view! {
        <div class="page diagnose-page">
            <style>{include_str!("diagnose.css")}</style>

            <h2>"Leaf Diagnosis"</h2>
            <p class="page-description">
                "Upload a photo of a leaf to identify disease and get treatment advice."
            </p>

            <div class="diagnose-layout">
                <div class="upload-column">
                    <ImagePicker
                        diagnose=diagnose
                        max_upload_bytes=max_upload_bytes
                    />

                    <div class="action-buttons">
                        <button
                            class="btn btn-primary"
                            on:click=on_submit
                            disabled=move || !diagnose.upload.with(|s| s.can_submit())
                        >
                            "Predict"
                        </button>
                    </div>

                    <Show when=move || diagnose.upload.with(|s| s.is_submitting())>
                        <div class="loading-indicator">
                            <div class="spinner"></div>
                            <p>"Analyzing your leaf..."</p>
                        </div>
                    </Show>
                </div>

                <div class="report-column">
                    <ResultCardView card=diagnose.card />
                </div>
            </div>

            <HistoryTable history=diagnose.history />
        </div>
    }
}
