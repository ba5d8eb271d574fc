//! Pinecone client integration tests with mocked network responses.
//!
//! These use wiremock to stand in for the index's data plane and validate:
//! - Wire format of the query request (field names, metadata flag, API key)
//! - Match parsing, including absent `text` metadata
//! - Zero-match responses
//! - Error surfacing on HTTP failures, malformed bodies, and timeouts

use kara::db::{PineconeIndex, VectorIndex};
use kara::types::AppError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn index_for(server: &MockServer) -> PineconeIndex {
    PineconeIndex::new(
        server.uri(),
        "test-api-key".to_string(),
        "gujtaxlaw".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

/// A query response in Pinecone's data-plane shape.
fn mock_query_response(matches: serde_json::Value) -> serde_json::Value {
    json!({
        "matches": matches,
        "namespace": "",
        "usage": {"readUnits": 1}
    })
}

#[tokio::test]
async fn query_sends_pinecone_wire_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("Api-Key", "test-api-key"))
        .and(body_partial_json(json!({
            "topK": 3,
            "includeMetadata": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_query_response(json!([
            {"id": "law-1", "score": 0.91, "metadata": {"text": "Deadline is March 31."}},
            {"id": "law-2", "score": 0.84, "metadata": {"text": "Penalties apply after deadline."}}
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let index = index_for(&mock_server);
    let matches = index.query(&[0.1, 0.2, 0.3], 3).await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "law-1");
    assert_eq!(matches[0].text, "Deadline is March 31.");
    assert!((matches[0].score - 0.91).abs() < 1e-6);
    assert_eq!(matches[1].text, "Penalties apply after deadline.");
}

#[tokio::test]
async fn match_order_is_preserved_verbatim() {
    let mock_server = MockServer::start().await;

    // Order comes from the service, not from re-sorting on our side.
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_query_response(json!([
            {"id": "b", "score": 0.5, "metadata": {"text": "second"}},
            {"id": "a", "score": 0.9, "metadata": {"text": "first"}}
        ]))))
        .mount(&mock_server)
        .await;

    let matches = index_for(&mock_server).query(&[1.0], 2).await.unwrap();
    assert_eq!(matches[0].id, "b");
    assert_eq!(matches[1].id, "a");
}

#[tokio::test]
async fn missing_text_metadata_defaults_to_empty_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_query_response(json!([
            {"id": "no-text", "score": 0.7, "metadata": {"section": "44AD"}},
            {"id": "no-meta", "score": 0.6}
        ]))))
        .mount(&mock_server)
        .await;

    let matches = index_for(&mock_server).query(&[1.0], 3).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].text, "");
    assert_eq!(matches[1].text, "");
}

#[tokio::test]
async fn zero_matches_is_a_valid_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_query_response(json!([]))))
        .mount(&mock_server)
        .await;

    let matches = index_for(&mock_server).query(&[1.0], 3).await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn response_without_matches_key_parses_as_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"namespace": ""})))
        .mount(&mock_server)
        .await;

    let matches = index_for(&mock_server).query(&[1.0], 3).await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn http_error_surfaces_as_index_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("index temporarily unavailable"),
        )
        .mount(&mock_server)
        .await;

    let err = index_for(&mock_server).query(&[1.0], 3).await.unwrap_err();
    match err {
        AppError::Index(msg) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("index temporarily unavailable"));
        }
        other => panic!("expected Index error, got {}", other),
    }
}

#[tokio::test]
async fn malformed_body_surfaces_as_index_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = index_for(&mock_server).query(&[1.0], 3).await.unwrap_err();
    assert!(matches!(err, AppError::Index(_)));
    assert!(err.to_string().contains("Malformed"));
}

#[tokio::test]
async fn slow_index_hits_the_configured_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_query_response(json!([])))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let index = PineconeIndex::new(
        mock_server.uri(),
        "test-api-key".to_string(),
        "gujtaxlaw".to_string(),
        Duration::from_millis(200),
    )
    .unwrap();

    let err = index.query(&[1.0], 3).await.unwrap_err();
    assert!(matches!(err, AppError::Index(_)));
}
