//! Search view read model
//!
//! A flattened, render-ready snapshot of the search view. Formatters only
//! ever see this, never the state machine.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Text shown in place of a price when a pharmacy does not carry a product.
pub const NO_STORES_MESSAGE: &str = "No stores selling this product near you";

/// Text shown in an empty search field.
pub const SEARCH_PLACEHOLDER: &str = "Search for a product";

/// One frame of the search view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchViewModel {
    /// Current search field contents
    pub query: String,
    pub forms: SelectorRowView,
    pub strengths: SelectorRowView,
    pub packings: SelectorRowView,
    /// What occupies the results area
    pub status: StatusView,
    /// When the displayed result was fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorRowView {
    pub label: &'static str,
    pub options: Vec<SelectorButtonView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorButtonView {
    pub label: String,
    pub selected: bool,
}

/// The results area. Loading wins over an error, and an error hides any
/// result still held in state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatusView {
    Idle,
    Loading { query: String },
    Error { message: String },
    Results { suggestions: Vec<SuggestionCardView> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionCardView {
    pub id: Option<String>,
    pub salt: String,
    pub form: Option<String>,
    pub strength: Option<String>,
    pub packing: Option<String>,
    /// Offers for the current selection; empty unless the selection equals
    /// this card's most common combination
    pub selected_offers: Vec<OfferRowView>,
    /// Products under this card's most common combination
    pub available_products: Vec<OfferRowView>,
}

/// One priced line: a pharmacy or product id and what to show beside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferRowView {
    pub label: String,
    pub price: Option<f64>,
}

impl OfferRowView {
    pub fn new(label: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }

    /// `Price: 12` or the not-carried message.
    pub fn display_price(&self) -> String {
        match self.price {
            Some(price) => format!("Price: {}", price),
            None => NO_STORES_MESSAGE.to_string(),
        }
    }
}
