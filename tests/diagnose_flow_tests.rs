use leafscan::api::{PredictOutcome, PredictionResponse};
use leafscan::config::ClientConfig;
use leafscan::error::ClientError;
use leafscan::history::HistoryLog;
use leafscan::report::*;
use leafscan::severity::SeverityLevel;
use leafscan::state::{SelectedFile, Selection, SubmitRejection};
use leafscan::view_model::DiagnoseView;
use leptos::prelude::*;

/// The diagnose page's view model, with the picked file's name standing in
/// for the browser `File`.
struct Page {
    _owner: Owner,
    config: ClientConfig,
    view: DiagnoseView<String>,
}

impl Page {
    fn new() -> Self {
        let owner = Owner::new();
        owner.set();
        Self {
            _owner: owner,
            config: ClientConfig::default(),
            view: DiagnoseView::new(),
        }
    }

    fn pick(&self, size: Option<u64>) -> Selection {
        let file = size.map(|size| SelectedFile {
            name: "leaf.jpg".to_string(),
            size,
            mime: "image/jpeg".to_string(),
            handle: "leaf.jpg".to_string(),
        });
        self.view.select(file, self.config.max_upload_bytes)
    }

    /// Run one submission the way the page does; returns the alert shown, if any.
    fn submit(&self, respond: impl FnOnce(String) -> PredictOutcome) -> Option<String> {
        let (file, guard) = match self.view.begin_submit() {
            Ok(started) => started,
            Err(rejection) => return rejection.alert_message().map(str::to_string),
        };
        assert!(!self.can_submit(), "submit stays disabled while a request is in flight");
        assert!(self.is_submitting());
        assert_eq!(self.card().predicted_class, CLASS_ANALYZING);

        let outcome = respond(file);
        let alert = outcome.alert_message();
        self.view.apply_outcome(&outcome);
        drop(guard);
        alert
    }

    fn can_submit(&self) -> bool {
        self.view.upload.with_untracked(|s| s.can_submit())
    }

    fn is_submitting(&self) -> bool {
        self.view.upload.with_untracked(|s| s.is_submitting())
    }

    fn preview(&self) -> Option<String> {
        self.view.upload.with_untracked(|s| s.preview().map(str::to_string))
    }

    fn card(&self) -> ResultCard {
        self.view.card.get_untracked()
    }

    fn history(&self) -> HistoryLog {
        self.view.history.get_untracked()
    }
}

fn body(class: &str, severity: &str) -> String {
    format!(
        r#"{{"predicted_class":"{}","confidence":"98%","severity":"{}","diagnosis":"Looks fine.","treatment":"Keep watering.","filename":"a.jpg"}}"#,
        class, severity
    )
}

#[test]
fn test_oversized_file_is_rejected() {
    let page = Page::new();
    let selection = page.pick(Some(4 * 1024 * 1024 + 1));

    match selection {
        Selection::Rejected { alert } => assert!(alert.contains("max 4MB")),
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(!page.can_submit());
    assert!(page.preview().is_none());
}

#[test]
fn test_file_within_limit_enables_submit_and_preview() {
    let page = Page::new();
    let generation = match page.pick(Some(1024)) {
        Selection::Accepted { generation } => generation,
        other => panic!("expected acceptance, got {:?}", other),
    };
    assert!(page.can_submit());

    assert!(page.view.show_preview(generation, "data:image/jpeg;base64,AA==".to_string()));
    assert_eq!(page.preview().as_deref(), Some("data:image/jpeg;base64,AA=="));
}

#[test]
fn test_clearing_selection_disables_submit() {
    let page = Page::new();
    page.pick(Some(1024));
    assert_eq!(page.pick(None), Selection::Empty);
    assert!(!page.can_submit());
    assert!(page.preview().is_none());
}

#[test]
fn test_submit_without_file_makes_no_request() {
    let page = Page::new();
    let mut called = false;
    let alert = page.submit(|_| {
        called = true;
        PredictOutcome::AppError("unreachable".to_string())
    });

    assert!(!called, "no request may be made without a file");
    assert_eq!(alert.as_deref(), SubmitRejection::NoFile.alert_message());
    assert_eq!(page.card(), ResultCard::default());
    assert!(!page.is_submitting());
}

#[test]
fn test_submit_uploads_the_picked_file() {
    let page = Page::new();
    page.pick(Some(2048));
    let mut sent = None;
    page.submit(|file| {
        sent = Some(file);
        PredictOutcome::from_body(true, &body("Healthy Leaf", "LOW"))
    });

    assert_eq!(sent.as_deref(), Some("leaf.jpg"));
}

#[test]
fn test_second_submit_while_in_flight_is_silent() {
    let page = Page::new();
    page.pick(Some(2048));
    let (_file, guard) = page.view.begin_submit().expect("first submit starts");

    assert_eq!(
        page.view.begin_submit().err(),
        Some(SubmitRejection::AlreadySubmitting)
    );
    assert!(SubmitRejection::AlreadySubmitting.alert_message().is_none());

    drop(guard);
    assert!(page.can_submit());
}

#[test]
fn test_dropping_guard_without_outcome_reenables_submit() {
    let page = Page::new();
    page.pick(Some(2048));
    {
        let _started = page.view.begin_submit().expect("submit starts");
        assert!(page.is_submitting());
    }

    assert!(!page.is_submitting());
    assert!(page.can_submit());
    assert!(page.history().is_empty());
}

#[test]
fn test_healthy_prediction() {
    let page = Page::new();
    page.pick(Some(2048));
    let alert = page.submit(|_| PredictOutcome::from_body(true, &body("Healthy Leaf", "✅ LOW")));

    assert!(alert.is_none());
    let card = page.card();
    assert_eq!(card.verdict, Some(Verdict::Healthy));
    assert_eq!(card.severity_level, Some(SeverityLevel::Low));
    assert_eq!(card.confidence, "(98%)");
    assert_eq!(card.filename, "a.jpg");

    let history = page.history();
    let row = history.get(0).expect("history row");
    assert_eq!(row.predicted_class, "Healthy Leaf");
    assert_eq!(row.severity, "LOW");
    assert!(!row.summary().contains('✅'));
    assert!(!page.is_submitting());
    assert!(page.can_submit());
}

#[test]
fn test_diseased_prediction() {
    let page = Page::new();
    page.pick(Some(2048));
    page.submit(|_| PredictOutcome::from_body(true, &body("Leaf Blight", "❗ HIGH")));

    let card = page.card();
    assert_eq!(card.verdict, Some(Verdict::Diseased));
    assert_eq!(card.severity_class(), "severity-label high");
    let history = page.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.get(0).unwrap().severity, "HIGH");
    assert!(page.can_submit());
}

#[test]
fn test_server_error_response() {
    let page = Page::new();
    page.pick(Some(2048));
    let alert =
        page.submit(|_| PredictOutcome::from_body(false, r#"{"error":"model unavailable"}"#));

    assert!(alert.unwrap().contains("model unavailable"));
    let card = page.card();
    assert_eq!(card.diagnosis, "model unavailable");
    assert_eq!(card.predicted_class, CLASS_FAILED);
    assert_eq!(card.verdict, Some(Verdict::Diseased));
    assert_eq!(card.confidence, "");
    assert_eq!(card.severity, SEVERITY_PLACEHOLDER);
    assert_eq!(card.severity_level, None);
    assert!(page.history().is_empty());
    assert!(!page.is_submitting());
    assert!(page.can_submit());
}

#[test]
fn test_error_field_with_ok_status_is_failure() {
    let page = Page::new();
    page.pick(Some(2048));
    let alert = page.submit(|_| {
        PredictOutcome::from_response(
            true,
            PredictionResponse {
                error: Some("No selected file.".to_string()),
                ..PredictionResponse::default()
            },
        )
    });

    assert_eq!(alert.as_deref(), Some("Error: No selected file."));
    assert!(page.history().is_empty());
    assert!(page.can_submit());
}

#[test]
fn test_network_failure() {
    let page = Page::new();
    page.pick(Some(2048));
    let alert = page.submit(|_| {
        PredictOutcome::TransportError(ClientError::Request("connection refused".to_string()))
    });

    assert!(alert.unwrap().contains("network error"));
    let card = page.card();
    assert_eq!(card.diagnosis, DIAGNOSIS_NETWORK_ERROR);
    assert_eq!(card.predicted_class, CLASS_NETWORK_ERROR);
    assert_eq!(card.verdict, Some(Verdict::Diseased));
    assert!(page.history().is_empty());
    assert!(!page.is_submitting());
    assert!(page.can_submit());
}

#[test]
fn test_non_json_body_is_transport_failure() {
    let page = Page::new();
    page.pick(Some(2048));
    page.submit(|_| PredictOutcome::from_body(true, "<html>Bad Gateway</html>"));

    assert_eq!(page.card().predicted_class, CLASS_NETWORK_ERROR);
    assert!(page.history().is_empty());
    assert!(page.can_submit());
}

#[test]
fn test_reset_is_idempotent() {
    let page = Page::new();
    page.pick(Some(2048));
    page.submit(|_| PredictOutcome::from_body(true, &body("Leaf Blight", "MODERATE ⚠")));

    page.pick(Some(4096));
    let once = page.card();
    page.pick(Some(4096));

    assert_eq!(once, ResultCard::default());
    assert_eq!(page.card(), once);
    assert_eq!(once.predicted_class, CLASS_PLACEHOLDER);
    assert_eq!(once.diagnosis, DIAGNOSIS_PLACEHOLDER);
    assert_eq!(once.treatment, TREATMENT_PLACEHOLDER);
    // History survives a new selection.
    assert_eq!(page.history().len(), 1);
}

#[test]
fn test_history_is_most_recent_first() {
    let page = Page::new();
    page.pick(Some(2048));
    page.submit(|_| PredictOutcome::from_body(true, &body("Leaf Blight", "HIGH 🚨")));
    page.submit(|_| PredictOutcome::from_body(true, &body("Healthy Leaf", "LOW ✅")));
    page.submit(|_| PredictOutcome::AppError("busy".to_string()));

    let history = page.history();
    let classes: Vec<_> = history.rows().map(|r| r.predicted_class.as_str()).collect();
    assert_eq!(classes, vec!["Healthy Leaf", "Leaf Blight"]);
}
