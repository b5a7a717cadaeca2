//! Log listing endpoint tests.
//!
//! # Invariants
//! - Records are returned in backend order, unsorted and unfiltered
//! - Optional fields may be null, empty or missing
//! - Non-2xx responses surface as `ClientError::ApiError`

mod common;

use common::*;
use logview_client::LogId;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_logs_preserves_backend_order() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("logs/list_logs.json");

    Mock::given(method("GET"))
        .and(path("/api/logs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let records = endpoints::get_logs(&client, &mock_server.uri())
        .await
        .expect("log listing should succeed");

    let ids: Vec<LogId> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![LogId::Int(42), LogId::Int(41), LogId::Int(40)]);
    assert_eq!(records[0].source_ip(), Some("192.168.1.20"));
    assert_eq!(records[1].source_ip(), None);
    assert_eq!(records[2].source_ip(), None);
    assert_eq!(records[2].endpoint(), None);
    assert_eq!(records[0].details.as_ref().unwrap()["attempt"], 3);
}

#[tokio::test]
async fn test_list_logs_minimal_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "timestamp": "t1", "log_level": "INFO", "message": "m1"}
        ])))
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).list_logs().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "m1");
    assert!(records[0].source_ip.is_none());
    assert!(records[0].endpoint.is_none());
}

#[tokio::test]
async fn test_list_logs_empty_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).list_logs().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_list_logs_server_error_unwraps_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "Internal Server Error"})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_logs().await.unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            ref url,
            ref message,
        } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/api/logs/"), "url was {url}");
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_logs_wrong_shape_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"logs": []})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_logs().await.unwrap_err();
    assert!(
        matches!(err, ClientError::InvalidResponse(ref msg) if msg.contains("log records")),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_list_logs_is_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_logs().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("Service Unavailable"));
}
