use leptos::prelude::*;

use crate::api::PredictOutcome;
use crate::history::HistoryLog;
use crate::report::ResultCard;
use crate::state::{SelectedFile, Selection, SubmitRejection, UploadState};

/// Reactive rendering targets of the diagnose page.
///
/// Built once when the page mounts and handed to every child component.
/// `H` is the handle kept for the picked file; in the browser a `web_sys::File`,
/// which is not `Send`, so the upload state lives in local storage.
pub struct DiagnoseView<H: 'static = web_sys::File> {
    pub upload: RwSignal<UploadState<H>, LocalStorage>,
    pub card: RwSignal<ResultCard>,
    pub history: RwSignal<HistoryLog>,
}

impl<H: 'static> Clone for DiagnoseView<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for DiagnoseView<H> {}

impl<H: Clone + 'static> DiagnoseView<H> {
    pub fn new() -> Self {
        Self {
            upload: RwSignal::new_local(UploadState::new()),
            card: RwSignal::new(ResultCard::default()),
            history: RwSignal::new(HistoryLog::new()),
        }
    }

    /// Take a new pick. The card always goes back to placeholders.
    pub fn select(&self, file: Option<SelectedFile<H>>, max_upload_bytes: u64) -> Selection {
        self.card.update(|c| c.reset());
        self.upload
            .try_update(|s| s.select(file, max_upload_bytes))
            .unwrap_or(Selection::Empty)
    }

    pub fn show_preview(&self, generation: u64, src: String) -> bool {
        self.upload
            .try_update(|s| s.show_preview(generation, src))
            .unwrap_or(false)
    }

    /// Start a submission: hands out the picked file and a guard that ends the
    /// submitting state when dropped. The card shows "Analyzing..." meanwhile.
    pub fn begin_submit(&self) -> Result<(H, SubmitGuard<H>), SubmitRejection> {
        let file = self
            .upload
            .try_update(|s| s.begin_submit())
            .unwrap_or(Err(SubmitRejection::AlreadySubmitting))?;
        let guard = SubmitGuard::new(self.upload);
        self.card.update(|c| c.begin_analysis());
        Ok((file, guard))
    }

    /// Render a finished submission into the card, and into history on success.
    pub fn apply_outcome(&self, outcome: &PredictOutcome) {
        let recorded = self
            .card
            .try_update(|c| c.show_outcome(outcome).cloned())
            .flatten();
        if let Some(result) = recorded {
            self.history.update(|h| h.record(&result));
        }
    }
}

impl<H: Clone + 'static> Default for DiagnoseView<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the submitting state when dropped, so the submit button comes
/// back and the loading indicator goes away on every exit path.
pub struct SubmitGuard<H: 'static = web_sys::File> {
    upload: RwSignal<UploadState<H>, LocalStorage>,
}

impl<H: 'static> SubmitGuard<H> {
    pub fn new(upload: RwSignal<UploadState<H>, LocalStorage>) -> Self {
        Self { upload }
    }
}

impl<H: 'static> Drop for SubmitGuard<H> {
    fn drop(&mut self) {
        // The page may already be unmounted.
        let _ = self.upload.try_update(|s| s.finish_submit());
    }
}
