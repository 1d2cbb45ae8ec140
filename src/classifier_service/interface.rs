use crate::predictor::selected_file::SelectedFile;
use serde::Deserialize;
use std::fmt;

/// Confidence as the service reports it. Some deployments send a number,
/// others a preformatted string such as `"97%"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(value) => write!(f, "{}", value),
            Confidence::Text(value) => write!(f, "{}", value),
        }
    }
}

/// The success body of `POST /predict`, before the breed is formatted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPrediction {
    pub breed: String,
    pub confidence: Confidence,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("classifier service responded with status {0}")]
    Status(u16),
    #[error("malformed prediction body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid classifier url: {0}")]
    InvalidUrl(String),
    #[error("prediction worker exited without a response")]
    Interrupted,
}

pub trait ClassifierService: Send + Sync {
    fn predict(&self, file: &SelectedFile) -> Result<RawPrediction, ClassifierError>;
}
