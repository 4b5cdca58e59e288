use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use mockall::mock;
use ping_service::{
    config::Config,
    handler::{
        default_handler::default_handler,
        ping_handler::{method_not_allowed, ping, post_ping},
    },
    service::ping_service::{PingPayload, PingRecord},
    sink::PingSink,
    state::AppState,
};
use serde_json::json;
use std::sync::Arc;

mock! {
    pub PingSink {}
    impl PingSink for PingSink {
        fn record_ping(&self, record: &PingRecord);
    }
}

fn create_test_app_state(config: Config, mock_sink: MockPingSink) -> AppState {
    AppState {
        config: Arc::new(config),
        sink: Arc::new(mock_sink),
    }
}

#[tokio::test]
async fn test_get_ping_returns_default_message() {
    let app_state = create_test_app_state(Config::default(), MockPingSink::new());

    let response = ping(State(app_state)).await.into_response();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body_bytes[..], b"Pong!\n");
}

#[tokio::test]
async fn test_get_ping_returns_configured_message() {
    let config = Config {
        message: "Hello there".to_string(),
        ..Config::default()
    };
    let app_state = create_test_app_state(config, MockPingSink::new());

    let body = ping(State(app_state)).await;

    assert_eq!(body, "Hello there\n");
}

#[tokio::test]
async fn test_post_ping_records_parsed_json() {
    let mut mock_sink = MockPingSink::new();
    mock_sink
        .expect_record_ping()
        .withf(|record: &PingRecord| {
            record.ping == PingPayload::Parsed(json!({"test": true})) && record.error.is_none()
        })
        .times(1)
        .return_const(());

    let app_state = create_test_app_state(Config::default(), mock_sink);

    let status = post_ping(State(app_state), Bytes::from_static(br#"{"test": true}"#)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_post_ping_records_empty_body_as_null() {
    let mut mock_sink = MockPingSink::new();
    mock_sink
        .expect_record_ping()
        .withf(|record: &PingRecord| record.ping == PingPayload::Empty && record.error.is_none())
        .times(1)
        .return_const(());

    let app_state = create_test_app_state(Config::default(), mock_sink);

    let status = post_ping(State(app_state), Bytes::new()).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_post_ping_acknowledges_malformed_json() {
    let mut mock_sink = MockPingSink::new();
    mock_sink
        .expect_record_ping()
        .withf(|record: &PingRecord| {
            record.ping == PingPayload::Raw("not-json".to_string()) && record.error.is_some()
        })
        .times(1)
        .return_const(());

    let app_state = create_test_app_state(Config::default(), mock_sink);

    let status = post_ping(State(app_state), Bytes::from_static(b"not-json")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_default_handler_returns_204() {
    let response = default_handler(Method::GET, Uri::from_static("/foo"))
        .await
        .into_response();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body_bytes.is_empty());
}

#[tokio::test]
async fn test_method_not_allowed_advertises_allowed_methods() {
    let response = method_not_allowed().await.into_response();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET, POST");
}
