//! E-Utilities client tests against a mock server.

use serde_json::json;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use geo_mcp::client::{Eutils, EutilsClient};
use geo_mcp::config::Config;
use geo_mcp::error::ClientError;

fn client_for(mock_server: &MockServer) -> EutilsClient {
    EutilsClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

fn query_value(request: &Request, key: &str) -> Option<String> {
    request.url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

// =============================================================================
// ESearch
// =============================================================================

#[tokio::test]
async fn test_search_sends_expected_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "geoprofiles"))
        .and(query_param("term", "breast cancer"))
        .and(query_param("retmax", "20"))
        .and(query_param("retmode", "json"))
        .and(query_param("email", "test@example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"esearchresult": {"count": "2", "idlist": ["1", "2"]}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("geoprofiles", "breast cancer", 20).await.unwrap();

    assert_eq!(result["esearchresult"]["idlist"], json!(["1", "2"]));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(query_value(&requests[0], "api_key"), None);
}

#[tokio::test]
async fn test_search_includes_api_key_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("api_key", "my-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"esearchresult": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config { api_key: Some("my-key".to_string()), ..Config::for_testing(&mock_server.uri()) };
    let client = EutilsClient::new(config).unwrap();

    client.search("gds", "p53", 5).await.unwrap();
}

#[tokio::test]
async fn test_search_without_email_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&mock_server).await;

    let config = Config { email: None, ..Config::for_testing(&mock_server.uri()) };
    let client = EutilsClient::new(config).unwrap();

    let err = client.search("geoprofiles", "cancer", 20).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingCredential));

    let err = client.summarize("geoprofiles", &["1".to_string()]).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingCredential));

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("gds", "cancer", 20).await.unwrap_err();

    match err {
        ClientError::RemoteRequest { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("expected RemoteRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_status_is_a_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("gds", "cancer", 20).await.unwrap_err();

    assert_eq!(err.status(), Some(429));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_malformed_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json here"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("gds", "cancer", 20).await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

// =============================================================================
// ESummary
// =============================================================================

#[tokio::test]
async fn test_summarize_joins_ids() {
    let mock_server = MockServer::start().await;

    let body = json!({"result": {"uids": ["10", "20", "30"], "10": {"title": "A"}}});
    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("db", "gds"))
        .and(query_param("id", "10,20,30"))
        .and(query_param("retmode", "json"))
        .and(query_param("email", "test@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let ids = vec!["10".to_string(), "20".to_string(), "30".to_string()];
    let result = client.summarize("gds", &ids).await.unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn test_summarize_empty_ids_still_sends_request() {
    let mock_server = MockServer::start().await;

    let body = json!({"esummaryresult": ["Empty id list - nothing todo"]});
    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.summarize("geoprofiles", &[]).await.unwrap();
    assert_eq!(result, body);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(query_value(&requests[0], "id").as_deref(), Some(""));
}

#[tokio::test]
async fn test_summarize_not_found_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such db"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.summarize("nope", &["1".to_string()]).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

// =============================================================================
// Client behavior
// =============================================================================

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = EutilsClient::new(Config::for_testing("http://localhost:9999/")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:9999");
}

#[test]
fn test_client_debug_hides_api_key() {
    let config = Config::new(Some("a@b.com".to_string()), Some("super-secret-key".to_string()));
    let client = EutilsClient::new(config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

#[test]
fn test_client_reports_credentials() {
    let client = EutilsClient::new(Config::default()).unwrap();
    assert!(!client.has_email());
    assert!(!client.has_api_key());
}
