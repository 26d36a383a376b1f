use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ViewFormatter;

/// Factory for creating view formatters
///
/// Encapsulates the choice of formatter adapter for an output format. It
/// belongs in the application layer as it selects infrastructure adapters
/// based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `color` only affects the text formatter; JSON never carries escapes.
    ///
    /// # Examples
    /// ```
    /// use pharma_search::application::dto::OutputFormat;
    /// use pharma_search::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn ViewFormatter> {
        match format {
            OutputFormat::Text if color => Box::new(TextFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::plain()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
