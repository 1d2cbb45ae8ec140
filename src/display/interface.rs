use crate::predictor::view::View;
use std::error::Error;

/// A front end that can only draw. Input arrives some other way.
pub trait Display {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}
