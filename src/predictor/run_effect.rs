use crate::classifier_service::interface::{ClassifierError, ClassifierService, RawPrediction};
use crate::library::logger::interface::Logger;
use crate::predictor::core::{Effect, Event};
use crate::predictor::selected_file::SelectedFile;
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub type Wake = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    classifier: Arc<dyn ClassifierService + Send + Sync>,
    preview_store: Arc<dyn PreviewStore + Send + Sync>,
    event_sender: Sender<Event>,
    wake: Wake,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        classifier: Arc<dyn ClassifierService + Send + Sync>,
        preview_store: Arc<dyn PreviewStore + Send + Sync>,
        event_sender: Sender<Event>,
        wake: Wake,
    ) -> Self {
        Self {
            logger,
            classifier,
            preview_store,
            event_sender,
            wake,
        }
    }

    /// Preview effects run inline so acquire and release for the same handle
    /// keep their order. Predictions run on their own thread and report back
    /// through the event channel.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::AcquirePreview { handle, file } => {
                if let Err(e) = self.preview_store.acquire(handle, &file) {
                    let _ = self.logger.error(&format!(
                        "Preview {:?} for {} unavailable: {}",
                        handle, file.name, e
                    ));
                }
            }
            Effect::ReleasePreview { handle } => {
                self.preview_store.release(handle);
                let _ = self.logger.info(&format!(
                    "Released preview {:?}, {} still live",
                    handle,
                    self.preview_store.live().len()
                ));
            }
            Effect::Predict { selection, file } => {
                let self_clone = self.clone();
                std::thread::spawn(move || self_clone.predict(selection, file));
            }
        }
    }

    fn predict(&self, selection: u64, file: SelectedFile) {
        let completion = Completion::new(selection, self.event_sender.clone(), self.wake.clone());

        let outcome = self.classifier.predict(&file);

        if let Err(e) = &outcome {
            let _ = self
                .logger
                .error(&format!("Error uploading image {}: {}", file.name, e));
        }

        completion.finish(outcome);
    }
}

/// Reports a prediction back to the runtime exactly once. If the worker
/// unwinds before `finish`, the drop reports `Interrupted` instead so the
/// form never stays in flight.
struct Completion {
    selection: u64,
    event_sender: Option<Sender<Event>>,
    wake: Wake,
}

impl Completion {
    fn new(selection: u64, event_sender: Sender<Event>, wake: Wake) -> Self {
        Self {
            selection,
            event_sender: Some(event_sender),
            wake,
        }
    }

    fn finish(mut self, outcome: Result<RawPrediction, ClassifierError>) {
        self.report(outcome);
    }

    fn report(&mut self, outcome: Result<RawPrediction, ClassifierError>) {
        if let Some(event_sender) = self.event_sender.take() {
            let _ = event_sender.send(Event::PredictDone {
                selection: self.selection,
                outcome,
            });
            (self.wake)();
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        self.report(Err(ClassifierError::Interrupted));
    }
}
