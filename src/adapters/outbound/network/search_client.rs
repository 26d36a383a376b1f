use crate::ports::outbound::SearchRepository;
use crate::search::domain::SearchResult;
use crate::shared::error::SearchError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// HttpSearchClient adapter for the product search backend
///
/// Implements the SearchRepository port with a single GET per search:
/// `<base_url>?q=<query>&pharmacyIds=<ids>`. No headers beyond the user
/// agent, no auth, no body.
///
/// # Failure handling
/// Each call is exactly one attempt. Transport errors, non-success statuses
/// and unparseable bodies each map to their own `SearchError` variant.
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
    pharmacy_ids: Vec<u32>,
}

impl HttpSearchClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://backend.cappsule.co.in/api/v1/new_search";
    pub const DEFAULT_PHARMACY_IDS: [u32; 3] = [1, 2, 3];
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

    /// Creates a client against the default backend
    pub fn new() -> Result<Self> {
        Self::with_endpoint(
            Self::DEFAULT_BASE_URL,
            Self::DEFAULT_PHARMACY_IDS.to_vec(),
            Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
        )
    }

    /// Creates a client for an explicit endpoint and pharmacy set
    pub fn with_endpoint(
        base_url: impl Into<String>,
        pharmacy_ids: Vec<u32>,
        timeout: Duration,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pharma-search/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            pharmacy_ids,
        })
    }

    /// Builds the request URL for `query`.
    ///
    /// The query is percent-encoded component-style (space becomes `%20`);
    /// pharmacy ids are joined with literal commas.
    pub fn request_url(&self, query: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let pharmacy_ids = self
            .pharmacy_ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}{}q={}&pharmacyIds={}",
            self.base_url,
            separator,
            urlencoding::encode(query),
            pharmacy_ids
        )
    }

    /// Turns a status and body into a result.
    fn decode_response(
        status: StatusCode,
        body: &str,
    ) -> std::result::Result<SearchResult, SearchError> {
        if !status.is_success() {
            return Err(SearchError::FetchFailed {
                status: status.as_u16(),
            });
        }

        let value: serde_json::Value = serde_json::from_str(body)?;
        Ok(SearchResult::from_value(value))
    }
}

#[async_trait]
impl SearchRepository for HttpSearchClient {
    async fn search(&self, query: &str) -> std::result::Result<SearchResult, SearchError> {
        let url = self.request_url(query);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Self::decode_response(status, &body)
    }
}
