use crate::predictor::core::PreviewHandle;
use crate::predictor::selected_file::SelectedFile;
use std::error::Error;

/// Owns the on-screen resources behind preview handles.
pub trait PreviewStore: Send + Sync {
    /// Create the resource for `handle` from the file bytes.
    /// On error the handle stays valid but has nothing to show.
    fn acquire(
        &self,
        handle: PreviewHandle,
        file: &SelectedFile,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Free the resource for `handle`. Releasing an unknown handle is a no-op.
    fn release(&self, handle: PreviewHandle);

    /// Handles currently holding a resource.
    fn live(&self) -> Vec<PreviewHandle>;
}
