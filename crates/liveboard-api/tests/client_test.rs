#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use liveboard_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Streamer list ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_streamers() {
    let (server, client) = setup().await;

    let envelope = json!({
        "code": 0,
        "data": [{
            "id": "bili-1",
            "name": "Alice",
            "platform": "bilibili",
            "room_id": "1001",
            "avatar": "https://cdn.example/a.png",
            "avatar_local": "/avatars/bili-1.png",
            "is_live": true,
            "title": "Speedrun",
            "start_time": "2024-06-15 10:30:00",
            "viewer_count": 15000,
            "room_url": "https://live.example/1001",
            "last_query_time": "2024-06-15 11:00:00"
        }, {
            "id": "dy-2",
            "name": "Bob",
            "platform": "douyu",
            "is_live": false,
            "room_url": ""
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/streamers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let streamers = client.list_streamers().await.unwrap();

    assert_eq!(streamers.len(), 2);
    assert_eq!(streamers[0].id, "bili-1");
    assert_eq!(streamers[0].viewer_count, Some(15000));
    assert_eq!(streamers[0].avatar_local.as_deref(), Some("/avatars/bili-1.png"));
    assert!(streamers[0].is_live);
    assert_eq!(streamers[1].name, "Bob");
    assert!(!streamers[1].last_query_failed);
    assert_eq!(streamers[1].start_time, None);
}

#[tokio::test]
async fn test_list_streamers_null_data_is_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/streamers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": null})))
        .mount(&server)
        .await;

    assert!(client.list_streamers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_zero_code_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/streamers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 2, "message": "busy"})),
        )
        .mount(&server)
        .await;

    let result = client.list_streamers().await;
    match result {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, 2);
            assert_eq!(message, "busy");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/streamers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list_streamers().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_uses_envelope_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/stats/x"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"code": 1, "message": "no rows"})),
        )
        .mount(&server)
        .await;

    let err = client.get_stats("x").await.unwrap_err();
    match err {
        Error::Http { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "no rows");
        }
        ref other => panic!("expected Http error, got: {other:?}"),
    }
    assert!(err.is_transient());
}

// ── Stats & history ─────────────────────────────────────────────────

#[tokio::test]
async fn test_get_stats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/stats/bili-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {
                "streamer_id": "bili-1",
                "total_sessions": 42,
                "total_duration": 5400,
                "avg_duration": 128,
                "last_live_time": "2024-06-14 20:00:00",
                "week_sessions": 3,
                "month_sessions": 12
            }
        })))
        .mount(&server)
        .await;

    let stats = client.get_stats("bili-1").await.unwrap();
    assert_eq!(stats.total_sessions, 42);
    assert_eq!(stats.total_duration, 5400);
    assert_eq!(stats.week_sessions, 3);
    assert_eq!(stats.month_sessions, 12);
    assert_eq!(stats.last_live_time.as_deref(), Some("2024-06-14 20:00:00"));
}

#[tokio::test]
async fn test_get_stats_without_data_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/stats/bili-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .mount(&server)
        .await;

    assert!(matches!(
        client.get_stats("bili-1").await,
        Err(Error::Deserialization { .. })
    ));
}

#[tokio::test]
async fn test_get_history_sends_limit() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/history/bili-1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [
                {"id": 7, "title": "Late night", "start_time": "2024-06-15T10:30:00Z"},
                {"id": 6, "title": "", "start_time": "2024-06-14T10:30:00Z", "duration": 3600}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = client
        .get_history("bili-1", liveboard_api::DEFAULT_HISTORY_LIMIT)
        .await
        .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].duration, None);
    assert_eq!(history[1].duration, Some(3600));
}
