use crate::search::domain::SaltSuggestion;
use serde::Serialize;

/// The three selector rows offered to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorOptions {
    pub forms: Vec<String>,
    pub strengths: Vec<String>,
    pub packings: Vec<String>,
}

impl SelectorOptions {
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty() && self.strengths.is_empty() && self.packings.is_empty()
    }
}

/// Projects a suggestion's form tree into selector rows.
///
/// - `forms` is the suggestion's `available_forms`, order kept
/// - `strengths` are the keys under the first available form
/// - `packings` are the keys under the first of those strengths
///
/// Total: a missing suggestion or a missing level yields empty rows from that
/// level down, never an error.
pub fn derive_options(suggestion: Option<&SaltSuggestion>) -> SelectorOptions {
    let Some(suggestion) = suggestion else {
        return SelectorOptions::default();
    };
    let Some(first_form) = suggestion.available_forms.first() else {
        return SelectorOptions::default();
    };

    let strengths = suggestion.strengths_of(first_form);
    let packings = strengths
        .first()
        .map(|first_strength| suggestion.packings_of(first_form, first_strength))
        .unwrap_or_default();

    SelectorOptions {
        forms: suggestion.available_forms.clone(),
        strengths,
        packings,
    }
}
