//! Integration tests for the REST client against a mock HTTP server.
//!
//! Verifies the non-2xx failure contract: every endpoint surfaces a
//! descriptive error and performs exactly one request (no retry).

use mlplay::adapters::ReqwestHttpClient;
use mlplay::api::{ApiClient, ApiError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient<ReqwestHttpClient> {
    ApiClient::with_http(ReqwestHttpClient::new(), format!("{}/api", server.uri()))
}

#[tokio::test]
async fn test_fetch_datasets_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "iris", "name": "Iris", "rows": 150, "columns": 5},
            {"id": "wine", "name": "Wine Quality", "rows": 6497, "columns": 12,
             "description": "Red and white vinho verde samples"}
        ])))
        .mount(&server)
        .await;

    let datasets = client(&server).fetch_datasets().await.unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0].id, "iris");
    assert_eq!(
        datasets[1].description.as_deref(),
        Some("Red and white vinho verde samples")
    );
}

#[tokio::test]
async fn test_create_session_non_2xx_rejects_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).create_session("iris").await.unwrap_err();
    assert!(matches!(err, ApiError::CreateSession { status: 503 }));
    assert_eq!(err.to_string(), "failed to create session (status 503)");

    // MockServer verifies expect(1) on drop: a retry would fail the test.
}

#[tokio::test]
async fn test_create_session_sends_dataset_id_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .and(body_json(serde_json::json!({"dataset_id": "wine"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "session_id": "sess-42", "dataset_id": "wine"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client(&server).create_session("wine").await.unwrap();
    assert_eq!(session.session_id, "sess-42");
    assert_eq!(session.dataset_id, "wine");
}

#[tokio::test]
async fn test_fetch_preview_404_is_descriptive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets/missing/preview"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_dataset_preview("missing")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to fetch preview for dataset missing (status 404)"
    );
}

#[tokio::test]
async fn test_fetch_preview_success_parses_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets/iris/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "dataset_id": "iris",
            "columns": [
                {"name": "sepal_length", "dtype": "float", "missing": 0.0, "distinct": 35},
                {"name": "species", "dtype": "category", "missing": 0.02}
            ],
            "sample": [["5.1", "setosa"], ["6.2", "virginica"]]
        })))
        .mount(&server)
        .await;

    let preview = client(&server).fetch_dataset_preview("iris").await.unwrap();
    assert_eq!(preview.columns.len(), 2);
    assert_eq!(preview.columns[0].distinct, Some(35));
    assert!(preview.columns[1].distinct.is_none());
    assert_eq!(preview.sample.len(), 2);
}
