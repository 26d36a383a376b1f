use super::salt_suggestion::SaltSuggestion;
use serde_json::Value;

const SUGGESTIONS_POINTER: &str = "/data/saltSuggestions";

/// A backend response body.
///
/// The raw JSON is kept exactly as received. Suggestions are decoded
/// leniently: entries that are not suggestion objects are skipped, and a body
/// without `data.saltSuggestions` simply has no suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    raw: Value,
    suggestions: Vec<SaltSuggestion>,
}

impl SearchResult {
    pub fn from_value(raw: Value) -> Self {
        let suggestions = raw
            .pointer(SUGGESTIONS_POINTER)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(SaltSuggestion::from_value).collect())
            .unwrap_or_default();

        Self { raw, suggestions }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn suggestions(&self) -> &[SaltSuggestion] {
        &self.suggestions
    }

    /// The suggestion at position 0 of the payload list.
    ///
    /// This looks at the raw list rather than the decoded one, so a malformed
    /// first entry yields None instead of promoting the second entry.
    pub fn first_suggestion(&self) -> Option<SaltSuggestion> {
        self.raw
            .pointer(SUGGESTIONS_POINTER)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(SaltSuggestion::from_value)
    }
}
