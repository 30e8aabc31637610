//! Integration tests for the paginated fetcher
//!
//! A wiremock server plays the remote API; assertions cover record counts,
//! request counts, `$skip` progression and the envelope/bare-array/other
//! response shapes.

use reqwest::Method;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use insyte_cli::api::InsyteClient;
use insyte_cli::api::query::QueryOptions;
use insyte_cli::auth::{Connection, Credentials};

fn test_client(server: &MockServer) -> InsyteClient {
    let connection = Connection::new(
        server.uri(),
        "v2",
        Credentials::ApiKey("test-key".to_string()),
    );
    InsyteClient::new(connection)
}

fn page(start: u32, len: u32) -> Vec<Value> {
    (start..start + len).map(|id| json!({"ID": id})).collect()
}

async fn skip_values(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .find(|(name, _)| name.as_ref() == "$skip")
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .collect()
}

#[tokio::test]
async fn test_fetch_all_walks_envelope_pages() {
    let server = MockServer::start().await;

    for (skip, len) in [(0u32, 100u32), (100, 100), (200, 100), (300, 37)] {
        Mock::given(method("GET"))
            .and(path("/v2/Contacts"))
            .and(query_param("$skip", skip.to_string()))
            .and(query_param("$top", "100"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"value": page(skip, len)})),
            )
            .mount(&server)
            .await;
    }

    let client = test_client(&server);
    let records = client
        .fetch_all(Method::GET, "/Contacts", None, QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 337);
    // Remote page order is preserved.
    assert_eq!(records[0]["ID"], json!(0));
    assert_eq!(records[100]["ID"], json!(100));
    assert_eq!(records[336]["ID"], json!(336));

    assert_eq!(skip_values(&server).await, ["0", "100", "200", "300"]);
}

#[tokio::test]
async fn test_fetch_all_supports_bare_arrays() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Jobs"))
        .and(query_param("$skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 100)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/Jobs"))
        .and(query_param("$skip", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(100, 12)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let records = client
        .fetch_all(Method::GET, "/Jobs", None, QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 112);
    assert_eq!(skip_values(&server).await, ["0", "100"]);
}

#[tokio::test]
async fn test_fetch_all_stops_on_unrecognized_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Contacts"))
        .and(query_param("$skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": page(0, 100)})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/Contacts"))
        .and(query_param("$skip", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "done"})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let records = client
        .fetch_all(Method::GET, "/Contacts", None, QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 100);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_fetch_all_single_short_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": page(0, 3)})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let records = client
        .fetch_all(Method::GET, "/Invoices", None, QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_all_respects_caller_top() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Contacts"))
        .and(query_param("$top", "10"))
        .and(query_param("$skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": page(0, 10)})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/Contacts"))
        .and(query_param("$top", "10"))
        .and(query_param("$skip", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": page(10, 4)})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let options = QueryOptions::new().with_top(10);
    let records = client
        .fetch_all(Method::GET, "/Contacts", None, options)
        .await
        .unwrap();

    assert_eq!(records.len(), 14);
    assert_eq!(skip_values(&server).await, ["0", "10"]);
}

#[tokio::test]
async fn test_fetch_all_honors_page_cap() {
    let server = MockServer::start().await;

    // Server always returns a full page; the cap must stop the loop.
    Mock::given(method("GET"))
        .and(path("/v2/Contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": page(0, 5)})))
        .mount(&server)
        .await;

    let client = test_client(&server).with_page_limits(5, 3);
    let records = client
        .fetch_all(Method::GET, "/Contacts", None, QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 15);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}
