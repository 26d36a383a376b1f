use async_trait::async_trait;
use pharma_search::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock SearchRepository for testing
///
/// Answers from a per-query table of canned bodies; unknown queries get an
/// empty suggestion list. Every call is recorded.
#[derive(Default, Clone)]
pub struct MockSearchRepository {
    pub responses: HashMap<String, Value>,
    pub delays: HashMap<String, Duration>,
    pub failures: HashMap<String, u16>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, query: &str, body: Value) -> Self {
        self.responses.insert(query.to_string(), body);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn with_failure(mut self, query: &str, status: u16) -> Self {
        self.failures.insert(query.to_string(), status);
        self
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchRepository for MockSearchRepository {
    async fn search(&self, query: &str) -> std::result::Result<SearchResult, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(status) = self.failures.get(query) {
            return Err(SearchError::FetchFailed { status: *status });
        }

        let body = self
            .responses
            .get(query)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({"data": {"saltSuggestions": []}}));
        Ok(SearchResult::from_value(body))
    }
}
