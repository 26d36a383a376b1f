mod lenient;
pub mod product_offer;
pub mod salt_suggestion;
pub mod search_result;
pub mod selection;

pub use product_offer::{AvailableProduct, PackingProducts, ProductOffer};
pub use salt_suggestion::{MostCommon, SaltSuggestion};
pub use search_result::SearchResult;
pub use selection::Selection;
