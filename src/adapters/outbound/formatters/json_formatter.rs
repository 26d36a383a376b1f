use crate::application::read_models::SearchViewModel;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting one compact JSON document per frame
///
/// Each frame is a single line, so interactive output can be consumed as
/// JSON Lines.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, view: &SearchViewModel) -> Result<String> {
        let mut json = serde_json::to_string(view)
            .map_err(|e| anyhow::anyhow!("Failed to serialize view to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
