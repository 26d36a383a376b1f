use super::lenient::{price, string_or_number};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single pharmacy's offer for a product.
///
/// A missing `selling_price` means the pharmacy does not carry the product.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductOffer {
    #[serde(default, deserialize_with = "string_or_number")]
    pub pharmacy_id: Option<String>,
    #[serde(default, deserialize_with = "price")]
    pub selling_price: Option<f64>,
}

impl ProductOffer {
    /// Decodes an offer, returning None for anything that is not an offer object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// Summary line for one entry of the "available products" listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableProduct {
    pub product_id: String,
    pub price: Option<f64>,
}

/// What sits at the packing level of a suggestion's form tree.
///
/// The backend has shipped both shapes: a flat list of offers, and a mapping
/// from product id to that product's offers (or `null` when no store has it).
/// Key order of the mapping is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum PackingProducts {
    Offers(Vec<ProductOffer>),
    ByProduct(Vec<(String, Option<Vec<ProductOffer>>)>),
}

impl PackingProducts {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(PackingProducts::Offers(decode_offers(items))),
            Value::Object(map) => Some(PackingProducts::ByProduct(
                map.iter()
                    .map(|(product_id, offers)| {
                        (
                            product_id.clone(),
                            offers.as_array().map(|items| decode_offers(items)),
                        )
                    })
                    .collect(),
            )),
            _ => None,
        }
    }

    /// All offers at this packing level, in payload order.
    pub fn offers(&self) -> Vec<&ProductOffer> {
        match self {
            PackingProducts::Offers(offers) => offers.iter().collect(),
            PackingProducts::ByProduct(products) => products
                .iter()
                .filter_map(|(_, offers)| offers.as_ref())
                .flatten()
                .collect(),
        }
    }

    /// One line per product. Mapped products report the price of their first
    /// offer; flat offers are listed by pharmacy id.
    pub fn available_products(&self) -> Vec<AvailableProduct> {
        match self {
            PackingProducts::Offers(offers) => offers
                .iter()
                .map(|offer| AvailableProduct {
                    product_id: offer.pharmacy_id.clone().unwrap_or_default(),
                    price: offer.selling_price,
                })
                .collect(),
            PackingProducts::ByProduct(products) => products
                .iter()
                .map(|(product_id, offers)| AvailableProduct {
                    product_id: product_id.clone(),
                    price: offers
                        .as_ref()
                        .and_then(|offers| offers.first())
                        .and_then(|offer| offer.selling_price),
                })
                .collect(),
        }
    }
}

fn decode_offers(items: &[Value]) -> Vec<ProductOffer> {
    items.iter().filter_map(ProductOffer::from_value).collect()
}
