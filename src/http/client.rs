//! reqwest-backed REST client
//!
//! Sends one request per call. Failures are never retried here; they are
//! classified into a [`ClashDetectionError`] and returned to the caller.
//! An optional token-bucket limiter throttles requests client-side.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::rest::{RestClient, RestRequest};
use crate::api_error::{ClashDetectionError, RawResponse};
use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration, disabled when `None`
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            rate_limit: None,
            default_headers: StringMap::new(),
            user_agent: format!("clash-detection-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Default [`RestClient`] implementation
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }
}

#[async_trait]
impl RestClient for HttpClient {
    async fn send(&self, request: RestRequest) -> Result<JsonValue> {
        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.request(request.method.into(), &request.url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        debug!("Sending {} {}", request.method, request.url);

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request {} {} failed: {}", request.method, request.url, e);
                return Err(transport_error(&e));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read response body from {}: {}", request.url, e);
                return Err(transport_error(&e));
            }
        };

        if !status.is_success() {
            let body = serde_json::from_str::<JsonValue>(&text).ok();
            let error = ClashDetectionError::parse(&RawResponse::new(status.as_u16(), body));
            warn!(
                status = status.as_u16(),
                code = %error.code,
                "Request {} {} rejected",
                request.method,
                request.url
            );
            return Err(error.into());
        }

        debug!("Request succeeded: {} {}", request.method, request.url);

        if text.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Classify a reqwest failure; no status means `Unknown`
fn transport_error(error: &reqwest::Error) -> Error {
    let raw = RawResponse {
        status_code: error.status().map(|s| s.as_u16()),
        body: None,
    };
    ClashDetectionError::parse(&raw).into()
}
