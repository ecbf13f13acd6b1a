//! File input with size check and image preview.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::browser;
use crate::files;
use crate::state::Selection;
use crate::view_model::DiagnoseView;

#[component]
pub fn ImagePicker(
    diagnose: DiagnoseView,
    max_upload_bytes: u64,
) -> impl IntoView {
    let file_input_id = "image-input";

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = input_from_event(&ev) else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));

        // A new pick always discards the previous prediction.
        let picked = file.clone().map(files::selected_file);
        match diagnose.select(picked, max_upload_bytes) {
            Selection::Rejected { alert } => {
                browser::alert(&alert);
                input.set_value("");
            }
            Selection::Accepted { generation } => {
                let Some(file) = file else {
                    return;
                };
                spawn_local(async move {
                    match files::read_data_url(&file).await {
                        Ok(src) => {
                            diagnose.show_preview(generation, src);
                        }
                        Err(e) => {
                            log::warn!("Preview decode failed: {}", e);
                        }
                    }
                });
            }
            Selection::Empty => {}
        }
    };

    view! {
        <div class="image-picker">
            <label for=file_input_id class="btn btn-secondary">
                "Choose Leaf Photo"
            </label>
            <input
                type="file"
                id=file_input_id
                accept="image/*"
                style="display: none"
                on:change=on_change
            />
            <p class="picker-hint">
                {format!("JPEG or PNG, up to {}MB", max_upload_bytes / (1024 * 1024))}
            </p>

            {move || diagnose.upload.with(|s| s.preview().map(str::to_string)).map(|src| view! {
                <div class="preview-container">
                    <img src=src class="preview-image" alt="Selected leaf" />
                </div>
            })}
        </div>
    }
}

fn input_from_event(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
}
