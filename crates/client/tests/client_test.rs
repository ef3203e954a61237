//! Integration tests for the API client.
//!
//! These tests use wiremock to stand in for the shift-request API and check
//! the paths, cookies and bodies the client sends as well as how responses
//! are decoded and errors mapped.

use std::time::Duration;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use shiftboard_client::{ApiClient, ShiftApi};
use shiftboard_core::{
    errors::ShiftError,
    models::{NewEntry, NewRequest, format::parse_datetime},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(5))
        .expect("Client creation should succeed")
        .with_session(Some("abc123".to_string()))
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn request_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "creator": {"id": 1, "name": "Manager"},
        "start_date": "2024-06-01",
        "end_date": "2024-06-02",
        "deadline": "2024-05-25 18:00:00",
        "created_at": "2024-05-01 09:00:00"
    })
}

#[test_log::test(tokio::test)]
async fn test_get_request_sends_session_cookie() {
    let server = MockServer::start().await;

    let mut body = request_json(3);
    body["entries"] = json!([
        {"id": 1, "user": {"id": 7, "name": "Alice"}, "date": "2024-06-01", "hour": 9},
        {"id": 2, "user": {"id": 8, "name": "Bob"}, "date": "2024-06-02", "hour": 14}
    ]);

    Mock::given(method("GET"))
        .and(path("/api/requests/3"))
        .and(header("cookie", "login_session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let detail = client_for(&server).get_request(3).await.expect("Fetch should succeed");

    assert_eq!(detail.request.id, 3);
    assert_eq!(detail.entries.len(), 2);
    assert_eq!(detail.entries[0].user.name, "Alice");
}

#[tokio::test]
async fn test_list_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([request_json(1), request_json(2)])))
        .mount(&server)
        .await;

    let requests = client_for(&server).list_requests().await.unwrap();

    let ids: Vec<i64> = requests.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_list_requests_null_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let requests = client_for(&server).list_requests().await.unwrap();

    assert!(requests.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "not logged in"})))
        .mount(&server)
        .await;

    let error = client_for(&server).session().await.unwrap_err();

    assert!(error.is_authentication());
    assert_eq!(error.to_string(), "Authentication error: not logged in");
}

#[tokio::test]
async fn test_error_status_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/requests/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no such request"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/requests/500"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    match client.get_request(99).await.unwrap_err() {
        ShiftError::NotFound(message) => assert_eq!(message, "no such request"),
        other => panic!("Expected NotFound, got: {other:?}"),
    }
    match client.get_request(500).await.unwrap_err() {
        ShiftError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "request failed with status 500");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/requests/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let error = client_for(&server).get_request(1).await.unwrap_err();

    assert!(matches!(error, ShiftError::Transport(_)));
}

#[tokio::test]
async fn test_create_request_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/requests"))
        .and(body_json(json!({
            "start_date": "2024-06-01",
            "end_date": "2024-06-30",
            "deadline": "2024-05-25 18:00:00"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let new_request = NewRequest {
        start_date: date("2024-06-01"),
        end_date: date("2024-06-30"),
        deadline: parse_datetime("2024-05-25 18:00:00").unwrap(),
    };
    let created = client_for(&server).create_request(&new_request).await.unwrap();

    assert_eq!(created.id, 12);
}

#[tokio::test]
async fn test_submit_entries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/requests/4/submissions"))
        .and(body_json(json!([
            {"date": "2024-06-01", "hour": 9},
            {"date": "2024-06-02", "hour": 14}
        ])))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 4, "entries": [{"id": 30}, {"id": 31}]})),
        )
        .mount(&server)
        .await;

    let entries = vec![
        NewEntry { date: date("2024-06-01"), hour: 9 },
        NewEntry { date: date("2024-06-02"), hour: 14 },
    ];
    let created = client_for(&server).submit_entries(4, &entries).await.unwrap();

    assert_eq!(created.id, 4);
    assert_eq!(created.entries.len(), 2);
}

#[tokio::test]
async fn test_submit_rejected_by_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/requests/4/submissions"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden"})))
        .mount(&server)
        .await;

    let entries = vec![NewEntry { date: date("2024-06-01"), hour: 9 }];
    let error = client_for(&server).submit_entries(4, &entries).await.unwrap_err();

    assert!(matches!(error, ShiftError::Authorization(_)));
}

#[tokio::test]
async fn test_login_captures_session_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"login_id": "alice", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "login_session=fresh-cookie; Path=/; Max-Age=10800; HttpOnly"),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap();
    let session = client.login("alice", "secret").await.unwrap();

    assert_eq!(session, Some("fresh-cookie".to_string()));
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "wrong password"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap();
    let error = client.login("alice", "nope").await.unwrap_err();

    assert!(error.is_authentication());
}

#[tokio::test]
async fn test_logout_and_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": 7, "name": "Alice", "roles": ["employee", "manager"], "created_at": "2024-01-01 00:00:00"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let user = client.session().await.unwrap();
    client.logout().await.unwrap();

    assert_eq!(user.name, "Alice");
    assert_eq!(user.roles, vec!["employee".to_string(), "manager".to_string()]);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 9 on a test machine.
    let client = ApiClient::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();

    let error = client.list_requests().await.unwrap_err();

    assert!(matches!(error, ShiftError::Transport(_)));
}
