//! Upload workflow: file selection, one upload at a time, and the state the
//! view renders from.

mod guard;

use std::time::Instant;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{SelectedFile, WorkflowState};
use crate::services::ExtractionService;
use guard::LoadingGuard;

pub struct UploadController<S> {
    service: S,
    state: watch::Sender<WorkflowState>,
}

impl<S: ExtractionService> UploadController<S> {
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        Self { service, state }
    }

    /// Read-only view of the state for the rendering layer.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Handles the picker's result. `None` means the picker was dismissed.
    pub fn on_file_selected(&self, candidate: Option<SelectedFile>) -> AppResult<()> {
        let Some(file) = candidate else {
            debug!("File picker dismissed, state unchanged");
            return Ok(());
        };

        if !file.is_pdf() {
            warn!(
                file_name = %file.name,
                mime_type = ?file.mime_type,
                "Rejected non-PDF selection"
            );
            let rejection = AppError::NotPdf;
            self.state.send_modify(|state| {
                state.error = Some(rejection.user_message());
                state.selected_file = None;
                // Cleared too, so an error and a stale result never show together.
                state.extracted_text = None;
            });
            return Err(rejection);
        }

        info!(file_name = %file.name, file_size = file.size, "PDF selected");
        self.state.send_modify(|state| {
            state.selected_file = Some(file);
            state.error = None;
            state.extracted_text = None;
        });
        Ok(())
    }

    /// Uploads the selected file and records the outcome. Returns the same
    /// error that ends up in the state, except [`AppError::UploadInFlight`],
    /// which leaves the state alone.
    pub async fn on_upload_requested(&self) -> AppResult<()> {
        let (file, loading) = self.begin_upload()?;

        let start = Instant::now();
        let upload_id = uuid::Uuid::new_v4().to_string()[..8].to_string();
        info!(
            upload_id = %upload_id,
            file_name = %file.name,
            file_size = file.size,
            "Starting upload"
        );

        match self.service.extract(&file).await {
            Ok(response) => {
                let text = response.into_text();
                info!(
                    upload_id = %upload_id,
                    text_length = text.as_ref().map_or(0, String::len),
                    total_time_ms = start.elapsed().as_millis() as u64,
                    "Upload completed successfully"
                );
                // A selection made mid-upload may have set an error since.
                loading.finish(|state| {
                    state.extracted_text = text;
                    state.error = None;
                });
                Ok(())
            }
            Err(e) => {
                error!(
                    upload_id = %upload_id,
                    error_code = e.error_code(),
                    error = %e,
                    "Upload failed"
                );
                let message = e.user_message();
                loading.finish(|state| state.error = Some(message));
                Err(e)
            }
        }
    }

    /// Checks the preconditions and flips to `loading` in one state update.
    fn begin_upload(&self) -> AppResult<(SelectedFile, LoadingGuard<'_>)> {
        let mut outcome = Err(AppError::NoFileSelected);

        self.state.send_if_modified(|state| {
            if state.loading {
                outcome = Err(AppError::UploadInFlight);
                return false;
            }
            match state.selected_file.clone() {
                None => {
                    state.error = Some(AppError::NoFileSelected.user_message());
                    true
                }
                Some(file) => {
                    state.loading = true;
                    state.error = None;
                    state.extracted_text = None;
                    outcome = Ok(file);
                    true
                }
            }
        });

        match outcome {
            Ok(file) => Ok((file, LoadingGuard::armed(&self.state))),
            Err(e) => {
                warn!(error_code = e.error_code(), "Upload request refused: {}", e);
                Err(e)
            }
        }
    }
}

impl<S> std::fmt::Debug for UploadController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadController")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
