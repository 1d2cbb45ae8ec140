use crate::classifier_service::interface::{ClassifierError, ClassifierService, RawPrediction};
use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::predictor::selected_file::SelectedFile;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

pub const IMAGE_FIELD: &str = "image";

pub struct ClassifierServiceHttp {
    client: Client,
    predict_url: Url,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierServiceHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let predict_url = config.predict_url();
        let predict_url =
            Url::parse(&predict_url).map_err(|_| ClassifierError::InvalidUrl(predict_url))?;

        // No timeout: a request runs until the service answers or the connection fails.
        let client = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            client,
            predict_url,
            logger: logger.with_namespace("classifier").with_namespace("http"),
        })
    }
}

impl ClassifierService for ClassifierServiceHttp {
    fn predict(&self, file: &SelectedFile) -> Result<RawPrediction, ClassifierError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {}, {} bytes)",
            self.predict_url,
            file.name,
            file.mime_type,
            file.bytes.len()
        ));

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(self.predict_url.clone())
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        let prediction: RawPrediction = serde_json::from_slice(&body)?;

        let _ = self.logger.info(&format!("Prediction received: {:?}", prediction));

        Ok(prediction)
    }
}
