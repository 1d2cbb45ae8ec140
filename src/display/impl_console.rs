use crate::display::interface::Display;
use crate::predictor::view::{ResultPanel, View};
use crate::preview_store::impl_memory::PreviewStoreMemory;
use std::error::Error;
use std::io::Write;
use std::sync::Arc;

pub struct DisplayConsole<W: Write> {
    out: W,
    previews: Arc<PreviewStoreMemory>,
    last_view: Option<View>,
}

impl DisplayConsole<std::io::Stdout> {
    pub fn stdout(previews: Arc<PreviewStoreMemory>) -> Self {
        Self::new(std::io::stdout(), previews)
    }
}

impl<W: Write> DisplayConsole<W> {
    pub fn new(out: W, previews: Arc<PreviewStoreMemory>) -> Self {
        Self {
            out,
            previews,
            last_view: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for DisplayConsole<W> {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_view.as_ref() == Some(view) {
            return Ok(());
        }

        writeln!(self.out, "┌ Dog Breed Predictor")?;

        match &view.file {
            Some(file) => {
                writeln!(self.out, "│ Image: {}", file.label)?;
                if let Some(hint) = file.hint {
                    writeln!(self.out, "│   ! {}", hint)?;
                }
            }
            None => writeln!(self.out, "│ Image: (none)")?,
        }

        if let Some(handle) = view.preview {
            match self.previews.dimensions(handle) {
                Some(dimensions) => writeln!(
                    self.out,
                    "│ Preview: {}x{}",
                    dimensions.width, dimensions.height
                )?,
                None => writeln!(self.out, "│ Preview: unavailable")?,
            }
        }

        let marker = if view.submit.enabled { "" } else { " (disabled)" };
        writeln!(self.out, "│ [{}]{}", view.submit.label, marker)?;

        if let Some(notice) = view.notice {
            writeln!(self.out, "│ Notice: {}", notice)?;
        }

        match &view.result {
            Some(ResultPanel::Error { message }) => {
                writeln!(self.out, "│ Error: {}", message)?;
            }
            Some(ResultPanel::Success { breed, confidence }) => {
                writeln!(self.out, "│ Prediction Result")?;
                writeln!(self.out, "│   Breed: {}", breed)?;
                writeln!(self.out, "│   Confidence: {}", confidence)?;
            }
            None => {}
        }

        writeln!(self.out, "└")?;
        self.out.flush()?;

        self.last_view = Some(view.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayConsole;
    use crate::display::interface::Display;
    use crate::predictor::core::PreviewHandle;
    use crate::predictor::view::{FileView, ResultPanel, SubmitButton, View, SUBMIT_LABEL};
    use crate::preview_store::impl_memory::PreviewStoreMemory;
    use std::sync::Arc;

    fn answered() -> View {
        View {
            file: Some(FileView {
                label: "rex.jpg (image/jpeg)".to_string(),
                hint: None,
            }),
            preview: Some(PreviewHandle(1)),
            result: Some(ResultPanel::Success {
                breed: "Golden Retriever".to_string(),
                confidence: "0.97".to_string(),
            }),
            submit: SubmitButton {
                label: SUBMIT_LABEL,
                enabled: true,
            },
            notice: None,
        }
    }

    #[test]
    fn test_renders_result() {
        let mut display = DisplayConsole::new(Vec::new(), Arc::new(PreviewStoreMemory::new()));

        display.render(&answered()).unwrap();

        let out = String::from_utf8(display.into_inner()).unwrap();
        assert!(out.contains("Image: rex.jpg (image/jpeg)"));
        assert!(out.contains("Preview: unavailable"));
        assert!(out.contains("[Submit]"));
        assert!(out.contains("Breed: Golden Retriever"));
        assert!(out.contains("Confidence: 0.97"));
    }

    #[test]
    fn test_skips_unchanged_view() {
        let mut display = DisplayConsole::new(Vec::new(), Arc::new(PreviewStoreMemory::new()));

        display.render(&answered()).unwrap();
        display.render(&answered()).unwrap();

        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out.matches("Dog Breed Predictor").count(), 1);
    }
}
