//! Prediction service client.
//!
//! One call: POST the selected image as multipart form data and fold the
//! reply into a [`PredictOutcome`].

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::files;

/// Alert text used when the service fails without saying why.
pub const UNKNOWN_SERVER_ERROR: &str = "Server returned an unknown error.";

/// Alert text for requests that never produced a usable response.
pub const NETWORK_ERROR_ALERT: &str = "A network error occurred. Check the console and server logs.";

// -- Wire types --

/// Response body of `POST /predict`.
///
/// Success and error replies share this shape, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictionResponse {
    pub predicted_class: Option<String>,
    pub confidence: Option<String>,
    pub severity: Option<String>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub filename: Option<String>,
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Server-provided error text, ignoring empty strings.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// A successful verdict, ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResult {
    pub predicted_class: String,
    /// Preformatted by the service, e.g. "98.12%".
    pub confidence: String,
    /// May carry pictographic markers.
    pub severity: String,
    pub diagnosis: String,
    pub treatment: String,
    pub filename: String,
    pub error: Option<String>,
}

impl From<PredictionResponse> for PredictionResult {
    fn from(body: PredictionResponse) -> Self {
        Self {
            predicted_class: body.predicted_class.unwrap_or_default(),
            confidence: body.confidence.unwrap_or_default(),
            severity: body.severity.unwrap_or_default(),
            diagnosis: body.diagnosis.unwrap_or_default(),
            treatment: body.treatment.unwrap_or_default(),
            filename: body.filename.unwrap_or_default(),
            error: body.error,
        }
    }
}

impl PredictionResult {
    /// Healthy when the class name mentions "healthy" in any case.
    pub fn is_healthy(&self) -> bool {
        self.predicted_class.to_lowercase().contains("healthy")
    }
}

// -- Outcome --

/// Result of one submission.
#[derive(Debug)]
pub enum PredictOutcome {
    Success(PredictionResult),
    /// The service answered but reported failure (non-2xx or `error` set).
    AppError(String),
    /// No usable response: request failed or the body was not JSON.
    TransportError(ClientError),
}

impl PredictOutcome {
    /// Fold a decoded body and the HTTP status into an outcome.
    ///
    /// A non-2xx status and an `error` field are treated the same way.
    pub fn from_response(status_ok: bool, body: PredictionResponse) -> Self {
        if !status_ok || body.error_message().is_some() {
            let message = body
                .error_message()
                .unwrap_or(UNKNOWN_SERVER_ERROR)
                .to_string();
            return PredictOutcome::AppError(message);
        }
        PredictOutcome::Success(body.into())
    }

    /// Like [`from_response`](Self::from_response), starting from raw body text.
    pub fn from_body(status_ok: bool, text: &str) -> Self {
        match serde_json::from_str::<PredictionResponse>(text) {
            Ok(body) => Self::from_response(status_ok, body),
            Err(e) => PredictOutcome::TransportError(ClientError::InvalidBody(e.to_string())),
        }
    }

    /// Text for the blocking alert shown on failure.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            PredictOutcome::Success(_) => None,
            PredictOutcome::AppError(msg) => Some(format!("Error: {}", msg)),
            PredictOutcome::TransportError(_) => Some(NETWORK_ERROR_ALERT.to_string()),
        }
    }
}

// -- Request --

/// Submit `file` to the prediction service.
///
/// Never fails: every error is folded into the returned outcome.
pub async fn predict(config: &ClientConfig, file: web_sys::File) -> PredictOutcome {
    match send_prediction(config, file).await {
        Ok((status_ok, text)) => PredictOutcome::from_body(status_ok, &text),
        Err(e) => PredictOutcome::TransportError(e),
    }
}

async fn send_prediction(
    config: &ClientConfig,
    file: web_sys::File,
) -> Result<(bool, String), ClientError> {
    let origin = web_sys::window()
        .ok_or(ClientError::NoWindow)?
        .location()
        .origin()
        .map_err(|e| ClientError::Browser(format!("{:?}", e)))?;
    let url = config.endpoint_url(&origin);

    let name = file.name();
    let mime = file.type_();
    let bytes = files::read_file_bytes(&file).await?;
    log::info!("Submitting {} ({} bytes) to {}", name, bytes.len(), url);

    let mut part = Part::bytes(bytes).file_name(name);
    if !mime.is_empty() {
        part = part.mime_str(&mime)?;
    }
    let form = Form::new().part(config.upload_field.clone(), part);

    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await?;
    let status_ok = response.status().is_success();
    let text = response.text().await?;

    Ok((status_ok, text))
}
