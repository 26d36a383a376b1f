/// Integration tests for the HTTP search client against an in-process server
mod test_utilities;

use pharma_search::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use test_utilities::stub_server::{paracetamol_body, StubServer};

fn client_for(server: &StubServer, pharmacy_ids: Vec<u32>) -> HttpSearchClient {
    HttpSearchClient::with_endpoint(server.base_url.clone(), pharmacy_ids, Duration::from_secs(5))
        .unwrap()
}

#[tokio::test]
async fn test_search_success_parses_suggestions() {
    let server = StubServer::fixed(200, paracetamol_body()).await;
    let client = client_for(&server, vec![1, 2, 3]);

    let result = client.search("paracetamol").await.unwrap();

    assert_eq!(result.suggestions().len(), 1);
    assert_eq!(result.suggestions()[0].salt, "Paracetamol");
    assert_eq!(result.raw()["data"]["saltSuggestions"][0]["id"], 11);
}

#[tokio::test]
async fn test_request_carries_query_and_pharmacy_ids() {
    let server = StubServer::fixed(200, paracetamol_body()).await;
    let client = client_for(&server, vec![1, 2, 3]);

    client.search("dolo 650").await.unwrap();

    assert_eq!(
        server.requests(),
        vec!["/api/v1/new_search?q=dolo%20650&pharmacyIds=1,2,3"]
    );
}

#[tokio::test]
async fn test_custom_pharmacy_ids() {
    let server = StubServer::fixed(200, "{}").await;
    let client = client_for(&server, vec![42]);

    client.search("x").await.unwrap();

    assert_eq!(server.requests(), vec!["/api/v1/new_search?q=x&pharmacyIds=42"]);
}

#[tokio::test]
async fn test_server_error_maps_to_fetch_failed() {
    let server = StubServer::fixed(500, "{\"error\": \"boom\"}").await;
    let client = client_for(&server, vec![1, 2, 3]);

    let err = client.search("paracetamol").await.unwrap_err();

    assert!(matches!(err, SearchError::FetchFailed { status: 500 }));
    assert_eq!(err.to_string(), "Failed to fetch data (HTTP 500)");
}

#[tokio::test]
async fn test_not_found_maps_to_fetch_failed() {
    let server = StubServer::fixed(404, "").await;
    let client = client_for(&server, vec![1, 2, 3]);

    let err = client.search("paracetamol").await.unwrap_err();

    assert!(matches!(err, SearchError::FetchFailed { status: 404 }));
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let server = StubServer::fixed(200, "<html>not json</html>").await;
    let client = client_for(&server, vec![1, 2, 3]);

    let err = client.search("paracetamol").await.unwrap_err();

    assert!(matches!(err, SearchError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse response"));
}

#[tokio::test]
async fn test_body_without_suggestions_is_empty_result() {
    let server = StubServer::fixed(200, "{\"data\": {}}").await;
    let client = client_for(&server, vec![1, 2, 3]);

    let result = client.search("nothing").await.unwrap();

    assert!(result.suggestions().is_empty());
    assert!(result.first_suggestion().is_none());
}

#[tokio::test]
async fn test_connection_refused_maps_to_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSearchClient::with_endpoint(
        format!("http://{}/api/v1/new_search", addr),
        vec![1, 2, 3],
        Duration::from_secs(5),
    )
    .unwrap();

    let err = client.search("paracetamol").await.unwrap_err();

    assert!(matches!(err, SearchError::Transport { .. }));
}

#[tokio::test]
async fn test_routes_by_query() {
    let server = StubServer::start(Arc::new(|target: &str| {
        if target.contains("q=paracetamol") {
            (200, paracetamol_body())
        } else {
            (503, String::new())
        }
    }))
    .await;
    let client = client_for(&server, vec![1, 2, 3]);

    assert!(client.search("paracetamol").await.is_ok());
    assert!(matches!(
        client.search("ibuprofen").await,
        Err(SearchError::FetchFailed { status: 503 })
    ));
}
