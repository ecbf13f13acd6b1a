//! Upload state for the diagnose page.
//!
//! The selected file, the submitting flag and the preview live in one record
//! and change only through the transitions below.

/// The file picked by the user.
///
/// `handle` is whatever gives access to the bytes later; in the browser that
/// is the `web_sys::File` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile<H = ()> {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub handle: H,
}

/// What a new selection resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing picked.
    Empty,
    /// Over the size limit; the input must be cleared and the user alerted.
    Rejected { alert: String },
    /// Accepted; decode the preview and report it under this generation.
    Accepted { generation: u64 },
}

/// Why a submission could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NoFile,
    AlreadySubmitting,
}

impl SubmitRejection {
    /// Alert text, if the user should be told.
    pub fn alert_message(self) -> Option<&'static str> {
        match self {
            SubmitRejection::NoFile => Some("Please select an image file first."),
            SubmitRejection::AlreadySubmitting => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState<H = ()> {
    selected: Option<SelectedFile<H>>,
    is_submitting: bool,
    preview: Option<String>,
    generation: u64,
}

impl<H> Default for UploadState<H> {
    fn default() -> Self {
        Self {
            selected: None,
            is_submitting: false,
            preview: None,
            generation: 0,
        }
    }
}

impl<H> UploadState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile<H>> {
        self.selected.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Image source for the preview, once decoded.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Submit control is enabled only with a file and no request in flight.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_submitting
    }

    /// Replace the selection. Any pending preview is invalidated.
    pub fn select(&mut self, file: Option<SelectedFile<H>>, max_bytes: u64) -> Selection {
        self.generation += 1;
        self.preview = None;
        self.selected = None;

        match file {
            None => Selection::Empty,
            Some(file) if file.size > max_bytes => Selection::Rejected {
                alert: format!(
                    "File is too large (max {}MB). Please select a smaller image.",
                    max_bytes / (1024 * 1024)
                ),
            },
            Some(file) => {
                self.selected = Some(file);
                Selection::Accepted {
                    generation: self.generation,
                }
            }
        }
    }

    /// Show a decoded preview. Ignored if a newer selection happened since.
    pub fn show_preview(&mut self, generation: u64, src: String) -> bool {
        if generation != self.generation || self.selected.is_none() {
            return false;
        }
        self.preview = Some(src);
        true
    }

    /// Enter the submitting state, handing out the file to upload.
    pub fn begin_submit(&mut self) -> Result<H, SubmitRejection>
    where
        H: Clone,
    {
        let handle = match &self.selected {
            Some(file) => file.handle.clone(),
            None => return Err(SubmitRejection::NoFile),
        };
        if self.is_submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        self.is_submitting = true;
        Ok(handle)
    }

    /// Leave the submitting state, whatever the outcome.
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }
}
