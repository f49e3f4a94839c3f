//! Access token sources
//!
//! Tokens are opaque `Authorization` header values such as `Bearer ey...`.
//! Acquiring them is up to the caller; the client only asks a provider for
//! one whenever a request has no explicit token.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Supplies access tokens on demand
#[async_trait]
pub trait AccessTokenProvider: Send + Sync + fmt::Debug {
    /// Return a token usable as the `Authorization` header value
    async fn access_token(&self) -> Result<String>;
}

/// Provider that always returns the same token
#[derive(Clone)]
pub struct StaticAccessToken {
    token: String,
}

impl StaticAccessToken {
    /// Wrap a fixed token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticAccessToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Pick the explicit token if present, otherwise ask the provider
pub(crate) async fn resolve_access_token(
    explicit: Option<&str>,
    provider: Option<&Arc<dyn AccessTokenProvider>>,
) -> Result<String> {
    match (explicit, provider) {
        (Some(token), _) => Ok(token.to_string()),
        (None, Some(provider)) => provider.access_token().await,
        (None, None) => Err(Error::MissingAccessToken),
    }
}

/// Fail fast when neither a token nor a provider is available
pub(crate) fn ensure_access_token(
    explicit: Option<&str>,
    provider: Option<&Arc<dyn AccessTokenProvider>>,
) -> Result<()> {
    if explicit.is_none() && provider.is_none() {
        return Err(Error::MissingAccessToken);
    }
    Ok(())
}
