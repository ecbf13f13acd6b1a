//! Display model of the result card and diagnosis block.

use crate::api::{PredictOutcome, PredictionResult};
use crate::severity::SeverityLevel;

pub const CLASS_PLACEHOLDER: &str = "Awaiting image...";
pub const CLASS_ANALYZING: &str = "Analyzing...";
pub const CLASS_FAILED: &str = "Prediction Failed";
pub const CLASS_NETWORK_ERROR: &str = "Network Error.";
pub const SEVERITY_PLACEHOLDER: &str = "---";
pub const DIAGNOSIS_PLACEHOLDER: &str = "Upload an image to get a full diagnosis here.";
pub const TREATMENT_PLACEHOLDER: &str = "The best treatment options will appear here.";
pub const DIAGNOSIS_NETWORK_ERROR: &str = "Error: Could not connect to the prediction server.";

/// Colour state of the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    Diseased,
}

impl Verdict {
    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Healthy => "healthy",
            Verdict::Diseased => "diseased",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub predicted_class: String,
    pub filename: String,
    pub confidence: String,
    pub severity: String,
    /// `None` means the bare label style.
    pub severity_level: Option<SeverityLevel>,
    pub verdict: Option<Verdict>,
    pub diagnosis: String,
    pub treatment: String,
}

impl Default for ResultCard {
    fn default() -> Self {
        Self {
            predicted_class: CLASS_PLACEHOLDER.to_string(),
            filename: String::new(),
            confidence: String::new(),
            severity: SEVERITY_PLACEHOLDER.to_string(),
            severity_level: None,
            verdict: None,
            diagnosis: DIAGNOSIS_PLACEHOLDER.to_string(),
            treatment: TREATMENT_PLACEHOLDER.to_string(),
        }
    }
}

impl ResultCard {
    /// Back to placeholders, discarding any prior prediction.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reset and mark as waiting on the service.
    pub fn begin_analysis(&mut self) {
        self.reset();
        self.predicted_class = CLASS_ANALYZING.to_string();
    }

    pub fn apply_severity(&mut self, severity: &str) {
        self.severity = severity.to_string();
        self.severity_level = Some(SeverityLevel::classify(severity));
    }

    pub fn show_success(&mut self, result: &PredictionResult) {
        self.filename = result.filename.clone();
        self.predicted_class = result.predicted_class.clone();
        self.confidence = format!("({})", result.confidence);
        self.apply_severity(&result.severity);
        self.diagnosis = result.diagnosis.clone();
        self.treatment = result.treatment.clone();
        self.verdict = Some(if result.is_healthy() {
            Verdict::Healthy
        } else {
            Verdict::Diseased
        });
    }

    /// The service answered with an error.
    pub fn show_app_error(&mut self, message: &str) {
        self.predicted_class = CLASS_FAILED.to_string();
        self.verdict = Some(Verdict::Diseased);
        self.diagnosis = message.to_string();
        self.confidence.clear();
        self.severity = SEVERITY_PLACEHOLDER.to_string();
        self.severity_level = None;
    }

    /// No usable response.
    pub fn show_transport_error(&mut self) {
        self.predicted_class = CLASS_NETWORK_ERROR.to_string();
        self.verdict = Some(Verdict::Diseased);
        self.diagnosis = DIAGNOSIS_NETWORK_ERROR.to_string();
    }

    /// Apply a finished submission.
    ///
    /// Returns the result that belongs in history, which is only ever a
    /// success.
    pub fn show_outcome<'a>(&mut self, outcome: &'a PredictOutcome) -> Option<&'a PredictionResult> {
        match outcome {
            PredictOutcome::Success(result) => {
                self.show_success(result);
                Some(result)
            }
            PredictOutcome::AppError(message) => {
                self.show_app_error(message);
                None
            }
            PredictOutcome::TransportError(_) => {
                self.show_transport_error();
                None
            }
        }
    }

    pub fn card_class(&self) -> String {
        match self.verdict {
            Some(v) => format!("result-card {}", v.css_class()),
            None => "result-card".to_string(),
        }
    }

    pub fn severity_class(&self) -> String {
        match self.severity_level {
            Some(level) => format!("severity-label {}", level.css_class()),
            None => "severity-label".to_string(),
        }
    }
}
