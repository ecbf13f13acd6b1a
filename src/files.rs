//! Browser file helpers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::ClientError;
use crate::state::SelectedFile;

/// Wrap a browser `File` with its metadata.
pub fn selected_file(file: web_sys::File) -> SelectedFile<web_sys::File> {
    SelectedFile {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
        handle: file,
    }
}

/// Read the full contents of a `File`.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, ClientError> {
    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ClientError::Decode(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| ClientError::Decode("Failed to convert to ArrayBuffer".to_string()))?;

    Ok(Uint8Array::new(&array_buffer).to_vec())
}

/// Decode a `File` into a `data:` URL usable as an image source.
pub async fn read_data_url(file: &web_sys::File) -> Result<String, ClientError> {
    let bytes = read_file_bytes(file).await?;
    Ok(data_url(&file.type_(), &bytes))
}

/// Build a base64 `data:` URL. An empty MIME type falls back to
/// `application/octet-stream`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
