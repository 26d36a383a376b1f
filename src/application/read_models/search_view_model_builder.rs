//! Builds the search view read model from the view state

use super::search_view_model::{
    OfferRowView, SearchViewModel, SelectorButtonView, SelectorRowView, StatusView,
    SuggestionCardView,
};
use crate::search::domain::{SaltSuggestion, Selection};
use crate::search::services::SelectorOptions;
use crate::search::state::{Phase, SearchViewState};

pub struct SearchViewModelBuilder;

impl SearchViewModelBuilder {
    pub fn build(state: &SearchViewState) -> SearchViewModel {
        let selection = state.selection();
        let empty = SelectorOptions::default();
        let options = state.options().unwrap_or(&empty);

        SearchViewModel {
            query: state.query().to_string(),
            forms: Self::build_row("Form", &options.forms, selection.form()),
            strengths: Self::build_row("Strength", &options.strengths, selection.strength()),
            packings: Self::build_row("Packing", &options.packings, selection.packing()),
            status: Self::build_status(state.phase(), selection),
            fetched_at: state.visible_result().map(|view| view.fetched_at),
        }
    }

    fn build_row(
        label: &'static str,
        options: &[String],
        selected: Option<&str>,
    ) -> SelectorRowView {
        SelectorRowView {
            label,
            options: options
                .iter()
                .map(|option| SelectorButtonView {
                    label: option.clone(),
                    selected: selected == Some(option.as_str()),
                })
                .collect(),
        }
    }

    fn build_status(phase: &Phase, selection: &Selection) -> StatusView {
        match phase {
            Phase::Idle => StatusView::Idle,
            Phase::Loading { query, .. } => StatusView::Loading {
                query: query.clone(),
            },
            Phase::Failed { message, .. } => StatusView::Error {
                message: message.clone(),
            },
            Phase::Loaded(view) => StatusView::Results {
                suggestions: view
                    .result
                    .suggestions()
                    .iter()
                    .map(|suggestion| Self::build_card(suggestion, selection))
                    .collect(),
            },
        }
    }

    fn build_card(suggestion: &SaltSuggestion, selection: &Selection) -> SuggestionCardView {
        let most_common = suggestion.most_common.as_ref();

        SuggestionCardView {
            id: suggestion.id.clone(),
            salt: suggestion.salt.clone(),
            form: most_common.map(|mc| mc.form.clone()),
            strength: most_common.map(|mc| mc.strength.clone()),
            packing: most_common.map(|mc| mc.packing.clone()),
            selected_offers: Self::build_selected_offers(suggestion, selection),
            available_products: Self::build_available_products(suggestion),
        }
    }

    /// Offers at the selected path, only for the card whose most common
    /// combination is exactly the selection.
    fn build_selected_offers(
        suggestion: &SaltSuggestion,
        selection: &Selection,
    ) -> Vec<OfferRowView> {
        let Some(most_common) = suggestion.most_common.as_ref() else {
            return Vec::new();
        };
        if !most_common.matches(selection) {
            return Vec::new();
        }

        suggestion
            .products_at(&most_common.form, &most_common.strength, &most_common.packing)
            .map(|products| {
                products
                    .offers()
                    .into_iter()
                    .map(|offer| {
                        OfferRowView::new(
                            offer.pharmacy_id.clone().unwrap_or_default(),
                            offer.selling_price,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn build_available_products(suggestion: &SaltSuggestion) -> Vec<OfferRowView> {
        suggestion
            .most_common_products()
            .map(|products| {
                products
                    .available_products()
                    .into_iter()
                    .map(|product| OfferRowView::new(product.product_id, product.price))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::domain::SearchResult;
    use crate::search::state::{Command, ViewEvent};
    use chrono::Utc;
    use serde_json::json;

    fn paracetamol_body(offer: serde_json::Value) -> serde_json::Value {
        json!({
            "data": {"saltSuggestions": [{
                "id": 11,
                "salt": "Paracetamol",
                "most_common": {"Form": "tablet", "Strength": "500mg", "Packing": "strip-10"},
                "available_forms": ["tablet"],
                "salt_forms_json": {"tablet": {"500mg": {"strip-10": [offer]}}}
            }]}
        })
    }

    fn loaded(body: serde_json::Value) -> SearchViewState {
        let (state, _) =
            SearchViewState::new().update(ViewEvent::QueryChanged("paracetamol".into()));
        let (state, command) = state.update(ViewEvent::DebounceElapsed);
        let Some(Command::Fetch { request, .. }) = command else {
            panic!("expected fetch");
        };
        state
            .update(ViewEvent::FetchSucceeded {
                request,
                result: SearchResult::from_value(body),
                fetched_at: Utc::now(),
            })
            .0
    }

    fn select_all(state: SearchViewState) -> SearchViewState {
        [
            ViewEvent::FormSelected("tablet".into()),
            ViewEvent::StrengthSelected("500mg".into()),
            ViewEvent::PackingSelected("strip-10".into()),
        ]
        .into_iter()
        .fold(state, |state, event| state.update(event).0)
    }

    fn only_card(view: &SearchViewModel) -> &SuggestionCardView {
        match &view.status {
            StatusView::Results { suggestions } => &suggestions[0],
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn test_idle_view() {
        let view = SearchViewModelBuilder::build(&SearchViewState::new());
        assert_eq!(view.status, StatusView::Idle);
        assert!(view.forms.options.is_empty());
        assert!(view.fetched_at.is_none());
    }

    #[test]
    fn test_selected_offer_shows_price() {
        let state = select_all(loaded(paracetamol_body(
            json!({"pharmacy_id": "1", "selling_price": 12}),
        )));
        let view = SearchViewModelBuilder::build(&state);
        let card = only_card(&view);

        assert_eq!(card.salt, "Paracetamol");
        assert_eq!(card.selected_offers.len(), 1);
        assert_eq!(card.selected_offers[0].label, "1");
        assert_eq!(card.selected_offers[0].display_price(), "Price: 12");
    }

    #[test]
    fn test_selected_offer_without_price_shows_no_stores() {
        let state = select_all(loaded(paracetamol_body(json!({"pharmacy_id": "1"}))));
        let view = SearchViewModelBuilder::build(&state);
        let card = only_card(&view);
        assert_eq!(
            card.selected_offers[0].display_price(),
            "No stores selling this product near you"
        );
    }

    #[test]
    fn test_partial_selection_shows_no_offers() {
        let state = loaded(paracetamol_body(json!({"pharmacy_id": "1", "selling_price": 12})));
        let state = state.update(ViewEvent::FormSelected("tablet".into())).0;
        let view = SearchViewModelBuilder::build(&state);
        let card = only_card(&view);
        assert!(card.selected_offers.is_empty());
        assert_eq!(card.available_products.len(), 1);
    }

    #[test]
    fn test_selector_rows_mark_selection() {
        let state = select_all(loaded(paracetamol_body(json!({"pharmacy_id": "1"}))));
        let view = SearchViewModelBuilder::build(&state);
        assert_eq!(
            view.forms.options,
            vec![SelectorButtonView {
                label: "tablet".into(),
                selected: true
            }]
        );
        assert!(view.strengths.options[0].selected);
        assert!(view.packings.options[0].selected);
        assert!(view.fetched_at.is_some());
    }

    #[test]
    fn test_error_hides_results_but_keeps_selectors() {
        let state = loaded(paracetamol_body(json!({"pharmacy_id": "1"})));
        let (state, _) = state.update(ViewEvent::QueryChanged("paracetamo".into()));
        let (state, command) = state.update(ViewEvent::DebounceElapsed);
        let Some(Command::Fetch { request, .. }) = command else {
            panic!("expected fetch");
        };

        let loading = SearchViewModelBuilder::build(&state);
        assert_eq!(
            loading.status,
            StatusView::Loading {
                query: "paracetamo".into()
            }
        );

        let state = state
            .update(ViewEvent::FetchFailed {
                request,
                message: "Failed to fetch data (HTTP 500)".into(),
            })
            .0;
        let view = SearchViewModelBuilder::build(&state);
        assert_eq!(
            view.status,
            StatusView::Error {
                message: "Failed to fetch data (HTTP 500)".into()
            }
        );
        assert_eq!(view.forms.options.len(), 1);
        assert!(view.fetched_at.is_none());
    }

    #[test]
    fn test_available_products_from_product_mapping() {
        let state = loaded(json!({
            "data": {"saltSuggestions": [{
                "id": "x",
                "salt": "Cetirizine",
                "most_common": {"Form": "tablet", "Strength": "10mg", "Packing": "strip-10"},
                "available_forms": ["tablet"],
                "salt_forms_json": {"tablet": {"10mg": {"strip-10": {
                    "p1": [{"pharmacy_id": 2, "selling_price": 18}],
                    "p2": null
                }}}}
            }]}
        }));
        let view = SearchViewModelBuilder::build(&state);
        let card = only_card(&view);
        assert_eq!(card.available_products.len(), 2);
        assert_eq!(card.available_products[0].label, "p1");
        assert_eq!(card.available_products[0].display_price(), "Price: 18");
        assert_eq!(card.available_products[1].price, None);
    }

    #[test]
    fn test_card_without_most_common() {
        let state = loaded(json!({"data": {"saltSuggestions": [{"salt": "Mystery"}]}}));
        let view = SearchViewModelBuilder::build(&state);
        let card = only_card(&view);
        assert_eq!(card.form, None);
        assert!(card.selected_offers.is_empty());
        assert!(card.available_products.is_empty());
    }
}
