use crate::classifier_service::interface::{ClassifierError, Confidence, RawPrediction};
use crate::predictor::format::format_breed;
use crate::predictor::selected_file::SelectedFile;

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Identifies the preview resource for one selection. Lives exactly as long
/// as the file it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Success { breed: String, confidence: Confidence },
    Failure { error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingImage,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MissingImage => "Please upload an image.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub selected_file: Option<SelectedFile>,
    pub preview: Option<PreviewHandle>,
    pub result: Option<PredictionResult>,
    pub status: SubmissionStatus,
    pub notice: Option<Notice>,
    /// Bumped on every selection so late responses can be matched to their file.
    pub selection: u64,
}

#[derive(Debug)]
pub enum Event {
    FileSelected(Option<SelectedFile>),
    SubmitRequested,
    PredictDone {
        selection: u64,
        outcome: Result<RawPrediction, ClassifierError>,
    },
    NoticeDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AcquirePreview {
        handle: PreviewHandle,
        file: SelectedFile,
    },
    ReleasePreview {
        handle: PreviewHandle,
    },
    Predict {
        selection: u64,
        file: SelectedFile,
    },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::FileSelected(file) => {
            let selection = state.selection + 1;
            let mut effects = vec![];

            if let Some(handle) = state.preview {
                effects.push(Effect::ReleasePreview { handle });
            }

            let preview = file.as_ref().map(|file| {
                let handle = PreviewHandle(selection);
                effects.push(Effect::AcquirePreview {
                    handle,
                    file: file.clone(),
                });
                handle
            });

            (
                State {
                    selected_file: file,
                    preview,
                    result: None,
                    selection,
                    ..state
                },
                effects,
            )
        }

        Event::SubmitRequested => {
            if state.status == SubmissionStatus::InFlight {
                return (state, vec![]);
            }

            match state.selected_file.clone() {
                None => (
                    State {
                        notice: Some(Notice::MissingImage),
                        ..state
                    },
                    vec![],
                ),
                Some(file) => {
                    let effects = vec![Effect::Predict {
                        selection: state.selection,
                        file,
                    }];
                    (
                        State {
                            status: SubmissionStatus::InFlight,
                            ..state
                        },
                        effects,
                    )
                }
            }
        }

        Event::PredictDone { selection, outcome } => {
            let is_current = selection == state.selection && state.selected_file.is_some();

            let result = if is_current {
                Some(match outcome {
                    Ok(raw) => PredictionResult::Success {
                        breed: format_breed(&raw.breed),
                        confidence: raw.confidence,
                    },
                    Err(_) => PredictionResult::Failure {
                        error: GENERIC_ERROR.to_string(),
                    },
                })
            } else {
                state.result.clone()
            };

            (
                State {
                    result,
                    status: SubmissionStatus::Idle,
                    ..state
                },
                vec![],
            )
        }

        Event::NoticeDismissed => (
            State {
                notice: None,
                ..state
            },
            vec![],
        ),
    }
}
