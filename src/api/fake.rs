//! In-process fake transport for unit tests
//!
//! [`FakeTransport`] answers requests from canned responses keyed by method
//! and path, and records every request it sees so tests can assert on
//! outbound traffic.
//!
//! Responses queued for the same endpoint are served in order; the last one
//! is sticky and keeps answering once the queue is down to it. Failures are
//! queued as HTTP status codes and classified exactly like
//! [`crate::api::http::HttpTransport`] classifies them.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::api::http::error_for_status;
use crate::api::{ApiRequest, Method, Transport};
use crate::error::{Result, SnoozeError};

type Outcome = std::result::Result<Value, (u16, String)>;

/// In-memory transport for tests
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<(Method, String), VecDeque<Outcome>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    /// Create a fake with no canned responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response for `method path`
    pub fn respond(&self, method: Method, path: &str, body: Value) {
        self.push(method, path, Ok(body));
    }

    /// Queue a failure with the given HTTP status for `method path`
    pub fn fail(&self, method: Method, path: &str, status: u16, message: &str) {
        self.push(method, path, Err((status, message.to_string())));
    }

    /// Drop anything queued for `method path` and respond with `body`
    pub fn replace(&self, method: Method, path: &str, body: Value) {
        self.responses
            .lock()
            .expect("fake responses lock poisoned")
            .insert((method, path.to_string()), VecDeque::from([Ok(body)]));
    }

    fn push(&self, method: Method, path: &str, outcome: Outcome) {
        self.responses
            .lock()
            .expect("fake responses lock poisoned")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(outcome);
    }

    /// Every request executed so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .expect("fake requests lock poisoned")
            .clone()
    }

    /// Number of requests executed so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("fake requests lock poisoned").len()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let key = (request.method, request.path());
        self.requests
            .lock()
            .expect("fake requests lock poisoned")
            .push(request);

        let outcome = {
            let mut responses = self.responses.lock().expect("fake responses lock poisoned");
            match responses.get_mut(&key) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match outcome {
            Some(Ok(body)) => Ok(body),
            Some(Err((status, message))) => Err(error_for_status(status, message).into()),
            None => Err(SnoozeError::Transport(format!(
                "no fake response for {} {}",
                key.0, key.1
            ))
            .into()),
        }
    }
}

/// A story record in wire format
pub fn story_json(story_id: &str, username: &str) -> Value {
    json!({
        "storyId": story_id,
        "title": format!("Story {}", story_id),
        "author": "Some Author",
        "url": format!("https://www.example.com/{}", story_id),
        "username": username,
        "createdAt": "2024-03-01T12:00:00.000Z",
        "updatedAt": "2024-03-01T12:00:00.000Z"
    })
}

/// A user record in wire format with empty collections
pub fn user_json(username: &str) -> Value {
    user_json_with(username, &[], &[])
}

/// A user record in wire format with the given favorites and own stories
pub fn user_json_with(username: &str, favorites: &[Value], stories: &[Value]) -> Value {
    json!({
        "username": username,
        "name": format!("{} name", username),
        "createdAt": "2024-01-15T08:30:00.000Z",
        "updatedAt": "2024-01-15T08:30:00.000Z",
        "favorites": favorites,
        "stories": stories
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/stories", json!({"stories": []}));

        fake.execute(ApiRequest::get(["stories"])).await.unwrap();
        fake.execute(ApiRequest::get(["stories"])).await.unwrap();

        assert_eq!(fake.request_count(), 2);
    }

    #[tokio::test]
    async fn test_queued_responses_then_sticky_last() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/users/a", json!(1));
        fake.respond(Method::Get, "/users/a", json!(2));

        let first = fake.execute(ApiRequest::get(["users", "a"])).await.unwrap();
        let second = fake.execute(ApiRequest::get(["users", "a"])).await.unwrap();
        let third = fake.execute(ApiRequest::get(["users", "a"])).await.unwrap();

        assert_eq!(first, json!(1));
        assert_eq!(second, json!(2));
        assert_eq!(third, json!(2));
    }

    #[tokio::test]
    async fn test_failure_is_classified() {
        let fake = FakeTransport::new();
        fake.fail(Method::Post, "/login", 401, "bad password");

        let err = fake.execute(ApiRequest::post(["login"])).await.unwrap_err();
        assert!(matches!(
            SnoozeError::classify(&err),
            Some(SnoozeError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_endpoint_is_transport_error() {
        let fake = FakeTransport::new();
        let err = fake.execute(ApiRequest::get(["nowhere"])).await.unwrap_err();
        assert!(err.to_string().contains("GET /nowhere"));
    }
}
