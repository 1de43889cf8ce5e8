use tokio::sync::watch;

use crate::models::WorkflowState;

/// Held for the lifetime of one upload. Clears `loading` exactly once:
/// through [`LoadingGuard::finish`] on completion, or on drop if the upload
/// future is abandoned first.
pub(crate) struct LoadingGuard<'a> {
    state: &'a watch::Sender<WorkflowState>,
    released: bool,
}

impl<'a> LoadingGuard<'a> {
    /// Callers must already have set `loading = true` on `state`.
    pub(crate) fn armed(state: &'a watch::Sender<WorkflowState>) -> Self {
        Self {
            state,
            released: false,
        }
    }

    /// Applies the upload outcome and clears `loading` in a single update.
    pub(crate) fn finish(mut self, apply: impl FnOnce(&mut WorkflowState)) {
        self.state.send_modify(|state| {
            apply(state);
            state.loading = false;
        });
        self.released = true;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            tracing::debug!("Upload abandoned before completion, clearing loading flag");
            self.state.send_modify(|state| state.loading = false);
        }
    }
}
