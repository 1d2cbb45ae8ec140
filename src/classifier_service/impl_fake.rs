use crate::classifier_service::interface::{
    ClassifierError, ClassifierService, Confidence, RawPrediction,
};
use crate::library::logger::interface::Logger;
use crate::predictor::selected_file::SelectedFile;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

const BREEDS: [&str; 12] = [
    "golden_retriever",
    "labrador_retriever",
    "german_shepherd",
    "lhasa_apso",
    "siberian_husky",
    "border_collie",
    "beagle",
    "pug",
    "shih-tzu",
    "bernese_mountain_dog",
    "french_bulldog",
    "irish_wolfhound",
];

/// Answers with a random breed after a short delay. Lets the form run
/// without a classifier service.
pub struct ClassifierServiceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    delay: Duration,
}

impl ClassifierServiceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, delay: Duration) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            delay,
        }
    }
}

impl ClassifierService for ClassifierServiceFake {
    fn predict(&self, file: &SelectedFile) -> Result<RawPrediction, ClassifierError> {
        let _ = self
            .logger
            .info(&format!("Classifying {} with fake classifier...", file.name));

        std::thread::sleep(self.delay);

        let mut rng = rand::rng();

        let breed = BREEDS[rng.random_range(0..BREEDS.len())];

        let confidence: f64 = rng.random_range(0.5..1.0);

        Ok(RawPrediction {
            breed: breed.to_string(),
            confidence: Confidence::Number((confidence * 100.0).round() / 100.0),
        })
    }
}
