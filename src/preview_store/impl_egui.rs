use crate::predictor::core::PreviewHandle;
use crate::predictor::selected_file::SelectedFile;
use crate::preview_store::interface::PreviewStore;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

/// Uploads one texture per handle. Dropping the `TextureHandle` on release
/// lets egui free the GPU memory.
pub struct PreviewStoreEgui {
    ctx: egui::Context,
    textures: Mutex<HashMap<PreviewHandle, egui::TextureHandle>>,
}

impl PreviewStoreEgui {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            textures: Mutex::new(HashMap::new()),
        }
    }

    pub fn texture(&self, handle: PreviewHandle) -> Option<egui::TextureHandle> {
        self.textures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&handle)
            .cloned()
    }
}

impl PreviewStore for PreviewStoreEgui {
    fn acquire(
        &self,
        handle: PreviewHandle,
        file: &SelectedFile,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let rgba = image::load_from_memory(&file.bytes)?.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

        let texture = self.ctx.load_texture(
            format!("preview-{}", handle.0),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        self.textures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(handle, texture);
        Ok(())
    }

    fn release(&self, handle: PreviewHandle) {
        self.textures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&handle);
    }

    fn live(&self) -> Vec<PreviewHandle> {
        self.textures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .copied()
            .collect()
    }
}
