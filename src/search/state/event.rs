use crate::search::domain::SearchResult;
use chrono::{DateTime, Utc};

/// Identifies one outbound fetch. Ids only ever increase within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Everything that can happen to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The search field now holds this text
    QueryChanged(String),
    /// The query has been stable for the debounce window
    DebounceElapsed,
    FetchSucceeded {
        request: RequestId,
        result: SearchResult,
        fetched_at: DateTime<Utc>,
    },
    FetchFailed {
        request: RequestId,
        message: String,
    },
    FormSelected(String),
    StrengthSelected(String),
    PackingSelected(String),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// (Re)start the debounce timer, dropping any pending one
    ArmDebounce,
    /// Drop the pending debounce timer, if any
    CancelDebounce,
    Fetch { request: RequestId, query: String },
}
