//! HTTP transport integration tests
//!
//! Drives `HttpTransport` against a `wiremock` server and checks request
//! encoding and the mapping of response statuses to `SnoozeError` variants.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use snooze::api::http::HttpTransport;
use snooze::api::{ApiRequest, Transport};
use snooze::config::ApiConfig;
use snooze::SnoozeError;

/// Construct an `HttpTransport` pointing at the given wiremock base URL.
fn make_transport(base_url: &str) -> HttpTransport {
    HttpTransport::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        ..ApiConfig::default()
    })
    .expect("valid config")
}

fn error_body(status: u16, message: &str) -> Value {
    json!({"error": {"status": status, "title": "Error", "message": message}})
}

#[tokio::test]
async fn test_get_returns_parsed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stories": []})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = make_transport(&server.uri());
    let value = transport
        .execute(ApiRequest::get(["stories"]))
        .await
        .expect("request should succeed");

    assert_eq!(value, json!({"stories": []}));
}

#[tokio::test]
async fn test_token_travels_as_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .and(query_param("token", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = make_transport(&server.uri());
    transport
        .execute(ApiRequest::get(["users", "alice"]).with_query("token", "tok-123"))
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn test_delete_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stories/abc"))
        .and(body_json(json!({"token": "tok"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = make_transport(&server.uri());
    transport
        .execute(ApiRequest::delete(["stories", "abc"]).with_body(json!({"token": "tok"})))
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/alice/favorites/s1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let transport = make_transport(&server.uri());
    let value = transport
        .execute(ApiRequest::post(["users", "alice", "favorites", "s1"]))
        .await
        .expect("request should succeed");

    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stories": []})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = make_transport(&format!("{}/v3/", server.uri()));
    transport
        .execute(ApiRequest::get(["stories"]))
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn test_status_codes_map_to_error_variants() {
    let server = MockServer::start().await;
    for (status, route) in [
        (400, "/bad"),
        (401, "/unauthorized"),
        (404, "/missing"),
        (409, "/conflict"),
        (500, "/broken"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_body(status, "boom")))
            .mount(&server)
            .await;
    }

    let transport = make_transport(&server.uri());
    let classify = |segment: &'static str| {
        let transport = transport.clone();
        async move {
            transport
                .execute(ApiRequest::get([segment]))
                .await
                .expect_err("request should fail")
        }
    };

    let err = classify("bad").await;
    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::Validation(m)) if m == "boom"
    ));

    let err = classify("unauthorized").await;
    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::Unauthorized(_))
    ));

    let err = classify("missing").await;
    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::NotFound(_))
    ));

    let err = classify("conflict").await;
    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::Conflict(_))
    ));

    let err = classify("broken").await;
    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::Api { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_error_without_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = make_transport(&server.uri());
    let err = transport
        .execute(ApiRequest::get(["users", "ghost"]))
        .await
        .expect_err("request should fail");

    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::NotFound(m)) if m == "Not Found"
    ));
}

#[tokio::test]
async fn test_non_json_success_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let transport = make_transport(&server.uri());
    let err = transport
        .execute(ApiRequest::get(["stories"]))
        .await
        .expect_err("request should fail");

    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::Transport(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1 of the loopback interface.
    let transport = make_transport("http://127.0.0.1:1");
    let err = transport
        .execute(ApiRequest::get(["stories"]))
        .await
        .expect_err("request should fail");

    assert!(matches!(
        SnoozeError::classify(&err),
        Some(SnoozeError::Transport(_))
    ));
}
