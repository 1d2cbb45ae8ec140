use crate::predictor::core::PreviewHandle;
use crate::predictor::selected_file::SelectedFile;
use crate::preview_store::interface::PreviewStore;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewDimensions {
    pub width: u32,
    pub height: u32,
}

/// Keeps only the decoded dimensions. Used by the console front end, which
/// cannot draw pixels.
#[derive(Default)]
pub struct PreviewStoreMemory {
    previews: Mutex<HashMap<PreviewHandle, PreviewDimensions>>,
}

impl PreviewStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(&self, handle: PreviewHandle) -> Option<PreviewDimensions> {
        self.previews
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&handle)
            .copied()
    }
}

impl PreviewStore for PreviewStoreMemory {
    fn acquire(
        &self,
        handle: PreviewHandle,
        file: &SelectedFile,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let image = image::load_from_memory(&file.bytes)?;
        self.previews
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(
                handle,
                PreviewDimensions {
                    width: image.width(),
                    height: image.height(),
                },
            );
        Ok(())
    }

    fn release(&self, handle: PreviewHandle) {
        self.previews
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&handle);
    }

    fn live(&self) -> Vec<PreviewHandle> {
        self.previews
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .copied()
            .collect()
    }
}
