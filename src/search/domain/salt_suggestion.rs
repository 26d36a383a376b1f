use super::lenient::{null_as_default, string_or_number};
use super::product_offer::PackingProducts;
use super::selection::Selection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The most commonly sold (form, strength, packing) combination of a salt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MostCommon {
    #[serde(rename = "Form", default, deserialize_with = "null_as_default")]
    pub form: String,
    #[serde(rename = "Strength", default, deserialize_with = "null_as_default")]
    pub strength: String,
    #[serde(rename = "Packing", default, deserialize_with = "null_as_default")]
    pub packing: String,
}

impl MostCommon {
    pub fn new(
        form: impl Into<String>,
        strength: impl Into<String>,
        packing: impl Into<String>,
    ) -> Self {
        Self {
            form: form.into(),
            strength: strength.into(),
            packing: packing.into(),
        }
    }

    /// True only when all three selection fields are set and equal this triple.
    pub fn matches(&self, selection: &Selection) -> bool {
        selection.form() == Some(self.form.as_str())
            && selection.strength() == Some(self.strength.as_str())
            && selection.packing() == Some(self.packing.as_str())
    }
}

/// One salt suggestion from the backend.
///
/// `salt_forms_json` is the form -> strength -> packing tree. It is kept as
/// raw JSON (in payload key order) and navigated on demand, because its leaves
/// come in more than one shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SaltSuggestion {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salt: String,
    #[serde(default)]
    pub most_common: Option<MostCommon>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_forms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salt_forms_json: Map<String, Value>,
}

impl SaltSuggestion {
    /// Decodes a suggestion; anything that is not a well-typed object yields None.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Strength keys available under `form`, in payload order.
    pub fn strengths_of(&self, form: &str) -> Vec<String> {
        self.strength_tree(form)
            .map(|strengths| strengths.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Packing keys available under `form` / `strength`, in payload order.
    pub fn packings_of(&self, form: &str, strength: &str) -> Vec<String> {
        self.packing_tree(form, strength)
            .map(|packings| packings.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Products stored at `form` / `strength` / `packing`, if that path exists.
    pub fn products_at(
        &self,
        form: &str,
        strength: &str,
        packing: &str,
    ) -> Option<PackingProducts> {
        self.packing_tree(form, strength)?
            .get(packing)
            .and_then(PackingProducts::from_value)
    }

    /// Products under this suggestion's own most-common combination.
    pub fn most_common_products(&self) -> Option<PackingProducts> {
        let mc = self.most_common.as_ref()?;
        self.products_at(&mc.form, &mc.strength, &mc.packing)
    }

    fn strength_tree(&self, form: &str) -> Option<&Map<String, Value>> {
        self.salt_forms_json.get(form)?.as_object()
    }

    fn packing_tree(&self, form: &str, strength: &str) -> Option<&Map<String, Value>> {
        self.strength_tree(form)?.get(strength)?.as_object()
    }
}
