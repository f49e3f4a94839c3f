//! REST transport contract
//!
//! Operation groups only ever talk to a [`RestClient`]. The default
//! implementation is [`super::HttpClient`]; tests and embedders can inject
//! their own.

use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;
use std::fmt;

/// A single request to the Clash Detection API
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Request headers
    pub headers: StringMap,
    /// JSON body
    pub body: Option<JsonValue>,
}

impl RestRequest {
    /// Create a request without headers or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: StringMap::new(),
            body: None,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends requests and normalizes failures
///
/// Implementations return the parsed JSON body on success (`Null` for an
/// empty body) and `Error::Api` built by
/// [`crate::api_error::ClashDetectionError::parse`] on any failure.
#[async_trait]
pub trait RestClient: Send + Sync + fmt::Debug {
    /// Send the request and return the response body
    async fn send(&self, request: RestRequest) -> Result<JsonValue>;
}
