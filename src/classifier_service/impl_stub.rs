use crate::classifier_service::interface::{
    ClassifierError, ClassifierService, Confidence, RawPrediction,
};
use crate::predictor::selected_file::SelectedFile;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

pub enum StubReply {
    Ok(RawPrediction),
    Err(ClassifierError),
    Panic,
}

impl StubReply {
    pub fn breed(breed: &str, confidence: f64) -> Self {
        StubReply::Ok(RawPrediction {
            breed: breed.to_string(),
            confidence: Confidence::Number(confidence),
        })
    }
}

/// Replays scripted replies in order. With a gate, every call blocks until
/// the test opens it.
pub struct ClassifierServiceStub {
    replies: Mutex<VecDeque<StubReply>>,
    gate: Option<Mutex<Receiver<()>>>,
    calls: AtomicUsize,
}

impl ClassifierServiceStub {
    pub fn new(replies: Vec<StubReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn gated(replies: Vec<StubReply>) -> (Self, Sender<()>) {
        let (open, gate) = channel();
        let stub = Self {
            gate: Some(Mutex::new(gate)),
            ..Self::new(replies)
        };
        (stub, open)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ClassifierService for ClassifierServiceStub {
    fn predict(&self, _file: &SelectedFile) -> Result<RawPrediction, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv();
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(StubReply::Ok(prediction)) => Ok(prediction),
            Some(StubReply::Err(e)) => Err(e),
            Some(StubReply::Panic) => panic!("stub classifier panicked"),
            None => Err(ClassifierError::Status(503)),
        }
    }
}
