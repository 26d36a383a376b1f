use super::event::{Command, RequestId, ViewEvent};
use crate::search::domain::{SearchResult, Selection};
use crate::search::services::{derive_options, SelectorOptions};
use chrono::{DateTime, Utc};

/// A successfully loaded result together with the options derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedView {
    pub query: String,
    pub result: SearchResult,
    pub options: SelectorOptions,
    pub fetched_at: DateTime<Utc>,
}

impl LoadedView {
    pub fn new(query: String, result: SearchResult, fetched_at: DateTime<Utc>) -> Self {
        let options = derive_options(result.first_suggestion().as_ref());
        Self {
            query,
            result,
            options,
            fetched_at,
        }
    }
}

/// Where the view is in its fetch cycle.
///
/// `Loading` and `Failed` keep the last loaded result in `retained` so it
/// stays reachable, but only `Loaded` ever renders a result list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        request: RequestId,
        query: String,
        retained: Option<Box<LoadedView>>,
    },
    Loaded(Box<LoadedView>),
    Failed {
        query: String,
        message: String,
        retained: Option<Box<LoadedView>>,
    },
}

impl Phase {
    fn into_latest_loaded(self) -> Option<Box<LoadedView>> {
        match self {
            Phase::Idle => None,
            Phase::Loaded(view) => Some(view),
            Phase::Loading { retained, .. } | Phase::Failed { retained, .. } => retained,
        }
    }
}

/// Full state of the search view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    query: String,
    phase: Phase,
    selection: Selection,
    last_request: Option<RequestId>,
}

impl SearchViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The most recently issued request, whether or not it has completed.
    pub fn last_request(&self) -> Option<RequestId> {
        self.last_request
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// The result currently on display; only set in `Loaded`.
    pub fn visible_result(&self) -> Option<&LoadedView> {
        match &self.phase {
            Phase::Loaded(view) => Some(view.as_ref()),
            _ => None,
        }
    }

    /// The last successfully loaded result, including one retained behind a
    /// pending fetch or an error.
    pub fn latest_loaded(&self) -> Option<&LoadedView> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Loaded(view) => Some(view.as_ref()),
            Phase::Loading { retained, .. } | Phase::Failed { retained, .. } => {
                retained.as_deref()
            }
        }
    }

    /// Selector rows stay visible across reloads and errors.
    pub fn options(&self) -> Option<&SelectorOptions> {
        self.latest_loaded().map(|view| &view.options)
    }

    /// Applies one event.
    pub fn update(mut self, event: ViewEvent) -> (Self, Option<Command>) {
        let command = match event {
            ViewEvent::QueryChanged(query) => {
                self.query = query;
                if self.query.is_empty() {
                    Some(Command::CancelDebounce)
                } else {
                    Some(Command::ArmDebounce)
                }
            }
            ViewEvent::DebounceElapsed => {
                if self.query.is_empty() {
                    None
                } else {
                    let request = self
                        .last_request
                        .map(RequestId::next)
                        .unwrap_or_else(RequestId::first);
                    self.last_request = Some(request);
                    let retained = std::mem::take(&mut self.phase).into_latest_loaded();
                    self.phase = Phase::Loading {
                        request,
                        query: self.query.clone(),
                        retained,
                    };
                    Some(Command::Fetch {
                        request,
                        query: self.query.clone(),
                    })
                }
            }
            ViewEvent::FetchSucceeded {
                request,
                result,
                fetched_at,
            } => {
                if let Some(query) = self.pending_query(request) {
                    let view = LoadedView::new(query, result, fetched_at);
                    self.phase = Phase::Loaded(Box::new(view));
                }
                None
            }
            ViewEvent::FetchFailed { request, message } => {
                if let Some(query) = self.pending_query(request) {
                    let retained = std::mem::take(&mut self.phase).into_latest_loaded();
                    self.phase = Phase::Failed {
                        query,
                        message,
                        retained,
                    };
                }
                None
            }
            ViewEvent::FormSelected(form) => {
                self.selection.select_form(form);
                None
            }
            ViewEvent::StrengthSelected(strength) => {
                self.selection.select_strength(strength);
                None
            }
            ViewEvent::PackingSelected(packing) => {
                self.selection.select_packing(packing);
                None
            }
        };

        (self, command)
    }

    /// The query of the in-flight fetch, if `request` is that fetch.
    /// Completions of superseded requests get None and are dropped.
    fn pending_query(&self, request: RequestId) -> Option<String> {
        match &self.phase {
            Phase::Loading {
                request: pending,
                query,
                ..
            } if *pending == request => Some(query.clone()),
            _ => None,
        }
    }
}
