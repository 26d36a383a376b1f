//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that give formatters a denormalized snapshot of
//! the search view.

pub mod search_view_model;
pub mod search_view_model_builder;

pub use search_view_model::{
    OfferRowView, SearchViewModel, SelectorButtonView, SelectorRowView, StatusView,
    SuggestionCardView, NO_STORES_MESSAGE, SEARCH_PLACEHOLDER,
};
pub use search_view_model_builder::SearchViewModelBuilder;
