use super::SelectedFile;

/// Everything the view shows. Owned by the controller, read by the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    pub selected_file: Option<SelectedFile>,
    pub extracted_text: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Idle,
    Ready,
    SelectingError,
    Uploading,
    Success,
    UploadError,
}

impl WorkflowState {
    pub fn status(&self) -> WorkflowStatus {
        if self.loading {
            return WorkflowStatus::Uploading;
        }
        match (&self.error, &self.selected_file, &self.extracted_text) {
            (Some(_), None, _) => WorkflowStatus::SelectingError,
            (Some(_), Some(_), _) => WorkflowStatus::UploadError,
            (None, _, Some(_)) => WorkflowStatus::Success,
            (None, Some(_), None) => WorkflowStatus::Ready,
            (None, None, None) => WorkflowStatus::Idle,
        }
    }

    /// The trigger control is usable only with a file and no upload running.
    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.loading
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WorkflowStatus::Idle => "idle",
            WorkflowStatus::Ready => "ready",
            WorkflowStatus::SelectingError => "selecting-error",
            WorkflowStatus::Uploading => "uploading",
            WorkflowStatus::Success => "success",
            WorkflowStatus::UploadError => "upload-error",
        };
        f.write_str(label)
    }
}
