//! Thin wrappers over window-level browser APIs.

use wasm_bindgen::{JsCast, JsValue};

use crate::error::ClientError;

fn js_err(e: JsValue) -> ClientError {
    ClientError::Browser(format!("{:?}", e))
}

/// Show a blocking alert. Logged instead when there is no window.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
        None => log::warn!("alert without window: {}", message),
    }
}

/// Offer `contents` as a file download.
pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoWindow)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ClientError::Browser("Failed to create download link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}
