use image::ImageFormat;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A user-chosen file, held whole in memory until replaced.
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = image::guess_format(&bytes)
            .or_else(|_| ImageFormat::from_path(path))
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| FALLBACK_MIME_TYPE.to_string());

        Ok(Self {
            name,
            mime_type,
            bytes: bytes.into(),
        })
    }

    pub fn from_bytes(name: &str, bytes: Arc<[u8]>) -> Self {
        let mime_type = image::guess_format(&bytes)
            .or_else(|_| ImageFormat::from_path(name))
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| FALLBACK_MIME_TYPE.to_string());

        Self {
            name: name.to_string(),
            mime_type,
            bytes,
        }
    }

    /// Mirrors an `accept="image/*"` picker hint. Advisory only.
    pub fn looks_like_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}
