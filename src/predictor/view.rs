use crate::predictor::core::{PredictionResult, PreviewHandle, State, SubmissionStatus};

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Predicting...";
pub const NOT_AN_IMAGE_HINT: &str = "This file does not look like an image.";

#[derive(Debug, Clone, PartialEq)]
pub struct FileView {
    pub label: String,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Error { message: String },
    Success { breed: String, confidence: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// Everything a front end needs to draw the form. Derived from [`State`] alone.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub file: Option<FileView>,
    pub preview: Option<PreviewHandle>,
    pub result: Option<ResultPanel>,
    pub submit: SubmitButton,
    pub notice: Option<&'static str>,
}

pub fn view(state: &State) -> View {
    let file = state.selected_file.as_ref().map(|file| FileView {
        label: format!("{} ({})", file.name, file.mime_type),
        hint: (!file.looks_like_image()).then_some(NOT_AN_IMAGE_HINT),
    });

    let result = state.result.as_ref().map(|result| match result {
        PredictionResult::Failure { error } => ResultPanel::Error {
            message: error.clone(),
        },
        PredictionResult::Success { breed, confidence } => ResultPanel::Success {
            breed: breed.clone(),
            confidence: confidence.to_string(),
        },
    });

    let submit = match state.status {
        SubmissionStatus::Idle => SubmitButton {
            label: SUBMIT_LABEL,
            enabled: true,
        },
        SubmissionStatus::InFlight => SubmitButton {
            label: SUBMITTING_LABEL,
            enabled: false,
        },
    };

    View {
        file,
        preview: state.preview,
        result,
        submit,
        notice: state.notice.map(|notice| notice.message()),
    }
}
