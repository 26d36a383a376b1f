//! pharma-search - terminal front end for pharmaceutical product search
//!
//! This library implements a search view over a product search backend: a
//! debounced query, one HTTP fetch per settled query, and a
//! form → strength → packing drill-down over the first suggestion, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`search`): Payload model, option derivation, selection and the
//!   view state machine
//! - **Application Layer** (`application`): The search session, read models and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): Config file loading and settings resolution
//!
//! # Example
//!
//! ```no_run
//! use pharma_search::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let repository = HttpSearchClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create the session and search once
//! let mut session = SearchSession::new(repository, progress_reporter, DEFAULT_DEBOUNCE);
//! session.search_now("paracetamol").await;
//! session.apply(UserAction::SelectForm("tablet".into()));
//!
//! // Format output
//! let view = SearchViewModelBuilder::build(session.state());
//! println!("{}", TextFormatter::plain().format(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod search;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpSearchClient;
    pub use crate::application::dto::{OutputFormat, SessionInput, UserAction};
    pub use crate::application::read_models::{SearchViewModel, SearchViewModelBuilder};
    pub use crate::application::use_cases::{SearchSession, DEFAULT_DEBOUNCE};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SearchRepository, ViewFormatter,
    };
    pub use crate::search::domain::{SaltSuggestion, SearchResult, Selection};
    pub use crate::search::services::{derive_options, SelectorOptions};
    pub use crate::search::state::{Command, SearchViewState, ViewEvent};
    pub use crate::shared::error::SearchError;
    pub use crate::shared::Result;
}
