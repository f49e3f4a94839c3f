//! Client configuration
//!
//! Unset options fall back to the public iTwin platform endpoints.

use crate::auth::{AccessTokenProvider, StaticAccessToken};
use crate::error::Result;
use crate::http::RestClient;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Default Clash Detection API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.bentley.com/clash-detection";

/// Default Clash Detection API version
pub const DEFAULT_API_VERSION: &str = "itwin-platform.v1";

/// Default iModels API base URL, used to look up named versions
pub const DEFAULT_IMODELS_BASE_URL: &str = "https://api.bentley.com/imodels";

/// iModels API version used for named version lookups
pub const IMODELS_API_VERSION: &str = "itwin-platform.v2";

/// Clash Detection API endpoint options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOptions {
    /// Clash Detection API base URL
    pub base_url: String,
    /// Clash Detection API version, sent in the `Accept` header
    pub version: String,
    /// iModels API base URL
    pub imodels_base_url: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            imodels_base_url: DEFAULT_IMODELS_BASE_URL.to_string(),
        }
    }
}

impl ApiOptions {
    /// Check that both base URLs are absolute URLs
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)?;
        Url::parse(&self.imodels_base_url)?;
        Ok(())
    }

    /// `Accept` header value for this API version
    pub fn accept_header(&self) -> String {
        accept_header(&self.version)
    }
}

/// `Accept` header value for a Bentley API version
pub fn accept_header(version: &str) -> String {
    format!("application/vnd.bentley.{version}+json")
}

/// User-configurable client options
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// API endpoint options
    pub api: ApiOptions,
    /// Transport; the reqwest-backed client is used when `None`
    pub rest_client: Option<Arc<dyn RestClient>>,
    /// Token source used when a call carries no explicit token
    pub access_token_provider: Option<Arc<dyn AccessTokenProvider>>,
}

impl ClientOptions {
    /// Create a new options builder
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api", &self.api)
            .field("rest_client", &self.rest_client)
            .field("has_access_token_provider", &self.access_token_provider.is_some())
            .finish()
    }
}

/// Builder for client options
#[derive(Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.api.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.options.api.version = version.into();
        self
    }

    /// Set the iModels API base URL
    pub fn imodels_base_url(mut self, url: impl Into<String>) -> Self {
        self.options.api.imodels_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a custom transport
    pub fn rest_client(mut self, client: Arc<dyn RestClient>) -> Self {
        self.options.rest_client = Some(client);
        self
    }

    /// Use a custom token source
    pub fn access_token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.options.access_token_provider = Some(provider);
        self
    }

    /// Use a fixed access token
    pub fn access_token(self, token: impl Into<String>) -> Self {
        self.access_token_provider(Arc::new(StaticAccessToken::new(token)))
    }

    /// Build the options
    pub fn build(self) -> ClientOptions {
        self.options
    }
}
