use crate::application::read_models::SearchViewModel;
use crate::shared::Result;

/// ViewFormatter port for rendering the search view
///
/// This port abstracts how the view model becomes text (coloured terminal
/// layout, JSON, ...).
pub trait ViewFormatter {
    /// Formats one frame of the search view
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &SearchViewModel) -> Result<String>;
}
