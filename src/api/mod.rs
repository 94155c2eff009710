//! Remote API access for the Hack-or-Snooze service
//!
//! This module defines the [`Transport`] trait that carries requests to the
//! service, plus the typed [`ApiClient`] layered on top of it. Concrete
//! transports live in submodules:
//!
//! - [`http::HttpTransport`] -- JSON over HTTP(S) via `reqwest`.
//! - `fake::FakeTransport` -- in-process fake used in tests (cfg(test)
//!   only).
//!
//! # Design
//!
//! The [`Transport`] trait is intentionally narrow: callers hand it an
//! [`ApiRequest`] and get back the parsed JSON body, or a classified
//! [`crate::error::SnoozeError`]. Endpoint paths, payload shapes and
//! response decoding belong to [`ApiClient`].

use std::fmt;

use serde_json::Value;

use crate::error::Result;

pub mod client;
pub mod http;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use client::ApiClient;
pub use types::{NewStory, ProfileChanges, StoryChanges, StoryRecord, UserRecord};

/// HTTP verbs used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource
    Get,
    /// Create a resource or perform an action
    Post,
    /// Partially update a resource
    Patch,
    /// Remove a resource
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// A single request to the service
///
/// The path is kept as raw segments so that identifiers and usernames can be
/// percent-encoded by the transport.
///
/// # Examples
///
/// ```
/// use snooze::api::{ApiRequest, Method};
///
/// let req = ApiRequest::get(["users", "alice"]).with_query("token", "abc");
/// assert_eq!(req.method, Method::Get);
/// assert_eq!(req.path(), "/users/alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Unencoded path segments below the base URL
    pub segments: Vec<String>,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Build a GET request
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Get, segments)
    }

    /// Build a POST request
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Post, segments)
    }

    /// Build a PATCH request
    pub fn patch<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Patch, segments)
    }

    /// Build a DELETE request
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Delete, segments)
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path rendered for logs and matching, e.g. `/stories/abc`
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Abstraction over the channel that reaches the service.
///
/// Implementations exist for HTTP and, in tests, an in-memory fake. A
/// transport performs exactly one attempt per call; it never retries.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Execute a request and return the parsed JSON response body.
    ///
    /// An empty response body is returned as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::SnoozeError`] classifying the failure:
    /// `NotFound`, `Unauthorized`, `Validation`, `Conflict`, `Api` when the
    /// service rejected the request, `Transport` when it could not be
    /// reached or answered with something unreadable.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}
