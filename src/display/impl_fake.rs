use crate::display::interface::Display;
use crate::predictor::view::View;
use std::error::Error;

#[derive(Default)]
pub struct DisplayFake {
    pub views: Vec<View>,
}

impl DisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for DisplayFake {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.views.push(view.clone());
        Ok(())
    }
}
