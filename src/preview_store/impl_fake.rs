use crate::predictor::core::PreviewHandle;
use crate::predictor::selected_file::SelectedFile;
use crate::preview_store::interface::PreviewStore;
use std::error::Error;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCall {
    Acquire(PreviewHandle),
    Release(PreviewHandle),
}

/// Records every acquire and release without decoding anything.
#[derive(Default)]
pub struct PreviewStoreFake {
    calls: Mutex<Vec<PreviewCall>>,
}

impl PreviewStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PreviewCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl PreviewStore for PreviewStoreFake {
    fn acquire(
        &self,
        handle: PreviewHandle,
        _file: &SelectedFile,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(PreviewCall::Acquire(handle));
        Ok(())
    }

    fn release(&self, handle: PreviewHandle) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(PreviewCall::Release(handle));
    }

    fn live(&self) -> Vec<PreviewHandle> {
        let calls = self.calls();
        let mut live = vec![];
        for call in calls {
            match call {
                PreviewCall::Acquire(handle) => live.push(handle),
                PreviewCall::Release(handle) => live.retain(|h| *h != handle),
            }
        }
        live
    }
}
