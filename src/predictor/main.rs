use crate::classifier_service::interface::ClassifierService;
use crate::library::logger::interface::Logger;
use crate::predictor::core::{init, transition, Effect, Event, State};
use crate::predictor::run_effect::{RunEffect, Wake};
use crate::predictor::view::{view, View};
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::{channel, Receiver, RecvError, Sender};
use std::sync::Arc;

/// Owns the form state and applies events to it one at a time.
pub struct Predictor {
    state: State,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Predictor {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        classifier: Arc<dyn ClassifierService + Send + Sync>,
        preview_store: Arc<dyn PreviewStore + Send + Sync>,
        wake: Wake,
    ) -> Self {
        let logger = logger.with_namespace("predictor");
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(
            logger.clone(),
            classifier,
            preview_store,
            event_sender.clone(),
            wake,
        );
        let (state, effects) = init();

        let predictor = Self {
            state,
            event_sender,
            event_receiver,
            run_effect,
            logger,
        };

        predictor.run_effects(effects);

        predictor
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn view(&self) -> View {
        view(&self.state)
    }

    pub fn send(&mut self, event: Event) {
        let _ = self.logger.info(&format!(
            "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
            self.state, event,
        ));

        let (new_state, effects) = transition(std::mem::take(&mut self.state), event);

        let _ = self.logger.info(&format!(
            "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state, effects
        ));

        self.state = new_state;

        self.run_effects(effects);
    }

    /// Applies every event that has already arrived. Returns how many.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.send(event);
            applied += 1;
        }
        applied
    }

    /// Blocks until the next event arrives, then applies it.
    pub fn wait(&mut self) -> Result<(), RecvError> {
        let event = self.event_receiver.recv()?;
        self.send(event);
        Ok(())
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect.run_effect(effect);
        }
    }
}
