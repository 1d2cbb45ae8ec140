use crate::display::interface::Display;
use crate::predictor::core::{Event, PredictionResult, SubmissionStatus};
use crate::predictor::main::Predictor;
use crate::predictor::selected_file::SelectedFile;
use std::error::Error;
use std::path::Path;

/// Drives the form without a window: select one file, submit it, wait.
pub struct AppConsole<D: Display> {
    predictor: Predictor,
    display: D,
}

impl<D: Display> AppConsole<D> {
    pub fn new(predictor: Predictor, display: D) -> Self {
        Self { predictor, display }
    }

    pub fn run(&mut self, path: &Path) -> Result<PredictionResult, Box<dyn Error + Send + Sync>> {
        let file = SelectedFile::from_path(path)?;
        self.select(Some(file))?;
        self.submit()
    }

    pub fn select(&mut self, file: Option<SelectedFile>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.predictor.send(Event::FileSelected(file));
        self.display.render(&self.predictor.view())
    }

    pub fn submit(&mut self) -> Result<PredictionResult, Box<dyn Error + Send + Sync>> {
        self.predictor.send(Event::SubmitRequested);
        self.display.render(&self.predictor.view())?;

        let notice = self.predictor.state().notice;
        if let Some(notice) = notice {
            self.predictor.send(Event::NoticeDismissed);
            return Err(notice.message().into());
        }

        while self.predictor.state().status == SubmissionStatus::InFlight {
            self.predictor.wait()?;
            self.display.render(&self.predictor.view())?;
        }

        self.predictor
            .state()
            .result
            .clone()
            .ok_or_else(|| "prediction finished without a result".into())
    }

    #[cfg(test)]
    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::AppConsole;
    use crate::classifier_service::impl_stub::{ClassifierServiceStub, StubReply};
    use crate::classifier_service::interface::ClassifierError;
    use crate::display::impl_fake::DisplayFake;
    use crate::library::logger::impl_fake::LoggerFake;
    use crate::library::test_image::png_bytes;
    use crate::predictor::core::{PredictionResult, GENERIC_ERROR};
    use crate::predictor::main::Predictor;
    use crate::predictor::selected_file::SelectedFile;
    use crate::predictor::view::SUBMITTING_LABEL;
    use crate::preview_store::impl_memory::PreviewStoreMemory;
    use std::sync::Arc;

    fn app(replies: Vec<StubReply>) -> AppConsole<DisplayFake> {
        let predictor = Predictor::new(
            Arc::new(LoggerFake::new()),
            Arc::new(ClassifierServiceStub::new(replies)),
            Arc::new(PreviewStoreMemory::new()),
            Arc::new(|| {}),
        );
        AppConsole::new(predictor, DisplayFake::new())
    }

    #[test]
    fn test_select_and_submit() {
        let mut app = app(vec![StubReply::breed("lhasa_apso", 0.81)]);
        let file = SelectedFile::from_bytes("rex.png", Arc::from(png_bytes(2, 2)));

        app.select(Some(file)).unwrap();
        let result = app.submit().unwrap();

        assert!(matches!(
            result,
            PredictionResult::Success { ref breed, .. } if breed == "Lhasa Apso"
        ));

        let views = &app.display().views;
        assert_eq!(views.len(), 3);
        assert_eq!(views[1].submit.label, SUBMITTING_LABEL);
        assert!(!views[1].submit.enabled);
        assert!(views[2].submit.enabled);
    }

    #[test]
    fn test_failed_prediction() {
        let mut app = app(vec![StubReply::Err(ClassifierError::Status(500))]);
        let file = SelectedFile::from_bytes("rex.png", Arc::from(png_bytes(2, 2)));

        app.select(Some(file)).unwrap();

        assert_eq!(
            app.submit().unwrap(),
            PredictionResult::Failure {
                error: GENERIC_ERROR.to_string(),
            }
        );
    }

    #[test]
    fn test_submit_without_file() {
        let mut app = app(vec![]);

        let error = app.submit().unwrap_err();

        assert_eq!(error.to_string(), "Please upload an image.");
        assert_eq!(app.display().views[0].notice, Some("Please upload an image."));
    }
}
