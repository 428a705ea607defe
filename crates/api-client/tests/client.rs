//! HTTP-level tests for `ApiClient` against a mocked backend.

use catalog_api_client::{ApiClient, ApiError, Item};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_and_client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

fn draft_item() -> Item {
    Item {
        name: "Keyboard".to_string(),
        description: Some(String::new()),
        price: 49.5,
        tax: Some(0.0),
    }
}

#[tokio::test]
async fn root_decodes_message() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "hello"})))
        .mount(&server)
        .await;

    let info = client.root().await.unwrap();
    assert_eq!(info.message, "hello");
}

#[tokio::test]
async fn get_item_without_query_omits_q() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/items/42"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42, "q": null})))
        .mount(&server)
        .await;

    let envelope = client.get_item(42, None).await.unwrap();
    assert_eq!(envelope.item_id, 42);
    assert_eq!(envelope.q, None);
}

#[tokio::test]
async fn get_item_empty_query_omits_q() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/items/42"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .mount(&server)
        .await;

    let envelope = client.get_item(42, Some("")).await.unwrap();
    assert_eq!(envelope.item_id, 42);
}

#[tokio::test]
async fn get_item_appends_non_empty_query() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/items/42"))
        .and(query_param("q", "foo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"item_id": 42, "q": "foo"})),
        )
        .mount(&server)
        .await;

    let envelope = client.get_item(42, Some("foo")).await.unwrap();
    assert_eq!(envelope.q.as_deref(), Some("foo"));
}

#[tokio::test]
async fn create_item_posts_exact_draft_fields() {
    let (server, client) = server_and_client().await;
    let item = draft_item();
    Mock::given(method("POST"))
        .and(path("/items/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Keyboard",
            "description": "",
            "price": 49.5,
            "tax": 0.0,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item": {
            "name": "Keyboard",
            "description": "",
            "price": 49.5,
            "tax": 0.0,
        }})))
        .mount(&server)
        .await;

    let created = client.create_item(&item).await.unwrap();
    assert_eq!(created.item, item);
}

#[tokio::test]
async fn health_decodes_status() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let info = client.health().await.unwrap();
    assert_eq!(info.status, "healthy");
}

#[tokio::test]
async fn non_success_maps_to_status_error() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.root().await.unwrap_err();
    assert!(matches!(err, ApiError::Status(500)));
}

#[tokio::test]
async fn not_found_maps_to_status_error() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/items/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_item(7, None).await.unwrap_err();
    assert!(matches!(err, ApiError::Status(404)));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_propagates() {
    // Nothing listens here; the connection is refused before any status.
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn joined_landing_calls_are_all_or_nothing() {
    // Root succeeds, health fails: the join must yield a single error.
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "up"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let joined = futures::try_join!(client.root(), client.health());
    assert!(joined.is_err());

    // And the mirror image: health up, root down.
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let joined = futures::try_join!(client.root(), client.health());
    assert!(joined.is_err());
}
