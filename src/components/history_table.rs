//! History table of successful predictions.
//!
//! Newest first. Rows are never edited; the table lives as long as the page.

use leptos::prelude::*;

use crate::browser;
use crate::history::{HistoryLog, CSV_FILENAME};

#[component]
pub fn HistoryTable(history: RwSignal<HistoryLog>) -> impl IntoView {
    let on_export = move |_| {
        let csv = history.with(|log| log.to_csv());
        if let Err(e) = browser::download_text(CSV_FILENAME, "text/csv", &csv) {
            log::error!("CSV export failed: {}", e);
        }
    };

    view! {
        <div class="history-panel">
            <style>{include_str!("history_table.css")}</style>
            <div class="history-header">
                <h4 class="history-title">"Prediction History"</h4>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=on_export
                    disabled=move || history.with(|log| log.is_empty())
                >
                    "Export CSV"
                </button>
            </div>

            <table class="results-table">
                <thead>
                    <tr>
                        <th>"Filename"</th>
                        <th>"Result"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || history.with(|log| {
                        log.rows().map(|row| {
                            let summary = row.summary();
                            view! {
                                <tr>
                                    <td>{row.filename.clone()}</td>
                                    <td>
                                        <strong>{row.predicted_class.clone()}</strong>
                                        <br />
                                        <small>{summary}</small>
                                    </td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()
                    })}
                </tbody>
            </table>
        </div>
    }
}
