use crate::search::domain::SearchResult;
use crate::shared::error::SearchError;
use async_trait::async_trait;

/// SearchRepository port for querying the product search backend
///
/// Implementations perform exactly one attempt per call: no retry, no
/// backoff, no caching. Callers only invoke it with a non-empty query; the
/// port does not check.
///
/// Implementations must be `Send + Sync` so a fetch can run alongside the
/// session's input handling.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Searches the backend for `query`
    ///
    /// # Returns
    /// The response body, parsed but otherwise unvalidated
    ///
    /// # Errors
    /// - `SearchError::Transport` if no response arrived
    /// - `SearchError::FetchFailed` for a non-success status
    /// - `SearchError::Parse` if the body is not JSON
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError>;
}
