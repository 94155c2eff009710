//! JSON-over-HTTP transport for the Hack-or-Snooze service
//!
//! This module implements [`HttpTransport`], which sends every
//! [`ApiRequest`] as a single HTTP request below a configured base URL and
//! classifies the outcome.
//!
//! # Status mapping
//!
//! | Status | Error |
//! |---|---|
//! | 2xx | success; body parsed as JSON (`Null` when empty) |
//! | 400, 422 | `SnoozeError::Validation` |
//! | 401, 403 | `SnoozeError::Unauthorized` |
//! | 404 | `SnoozeError::NotFound` |
//! | 409 | `SnoozeError::Conflict` |
//! | other | `SnoozeError::Api` |
//!
//! Connection failures, timeouts and unreadable bodies surface as
//! `SnoozeError::Transport`. The message is taken from the service's
//! `{"error": {"message": ...}}` body when it has one.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::api::{ApiRequest, Method, Transport};
use crate::config::ApiConfig;
use crate::error::{Result, SnoozeError};

/// reqwest-backed [`Transport`]
///
/// # Examples
///
/// ```
/// use snooze::api::http::HttpTransport;
/// use snooze::config::ApiConfig;
///
/// let transport = HttpTransport::new(&ApiConfig::default()).unwrap();
/// assert_eq!(transport.base_url().as_str(), "https://hack-or-snooze-v3.herokuapp.com/");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Construct a transport from API configuration
    ///
    /// No network I/O is performed at construction time.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the base URL does not parse or cannot
    /// carry a path, or if the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SnoozeError::Config(format!("Invalid base_url {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SnoozeError::Config(format!(
                "base_url cannot carry a path: {}",
                config.base_url
            ))
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SnoozeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized HTTP transport: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// The base URL every request path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SnoozeError::Config(format!("Invalid base_url {}", self.base_url)))?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = self.endpoint(&request)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        // The query may carry the session token; log the path only.
        tracing::debug!("{} {}", request.method, request.path());

        let mut builder = self.client.request(method, url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::warn!("{} {} failed: {}", request.method, request.path(), e);
            SnoozeError::Transport(format!("Request to {} failed: {}", request.path(), e))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            SnoozeError::Transport(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let message = error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            tracing::debug!(
                "{} {} returned {}: {}",
                request.method,
                request.path(),
                status,
                message
            );
            return Err(error_for_status(status.as_u16(), message).into());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            SnoozeError::Transport(format!("Response from {} is not JSON: {}", request.path(), e))
                .into()
        })
    }
}

/// Classify a non-success HTTP status
pub(crate) fn error_for_status(status: u16, message: String) -> SnoozeError {
    match StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR) {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            SnoozeError::Validation(message)
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SnoozeError::Unauthorized(message),
        StatusCode::NOT_FOUND => SnoozeError::NotFound(message),
        StatusCode::CONFLICT => SnoozeError::Conflict(message),
        _ => SnoozeError::Api { status, message },
    }
}

/// Extract `error.message` (or `error.title`) from an error body
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    error
        .get("message")
        .or_else(|| error.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
