//! Request plumbing shared by all operation groups

use super::url::UrlFormatter;
use crate::auth::{ensure_access_token, resolve_access_token, AccessTokenProvider};
use crate::config::ApiOptions;
use crate::error::{Error, Result};
use crate::http::{RestClient, RestRequest};
use crate::models::CollectionResponse;
use crate::pagination::{EntityListIterator, Page, PageQuery};
use crate::types::{JsonValue, Method, PreferReturn};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Everything an operation group needs to send requests
#[derive(Debug)]
pub(crate) struct OperationOptions {
    pub(crate) rest_client: Arc<dyn RestClient>,
    pub(crate) api: ApiOptions,
    pub(crate) urls: UrlFormatter,
    pub(crate) access_token_provider: Option<Arc<dyn AccessTokenProvider>>,
}

/// One API call before authorization is resolved
#[derive(Debug, Clone, Default)]
pub(crate) struct OperationRequest {
    pub(crate) url: String,
    pub(crate) access_token: Option<String>,
    pub(crate) accept: Option<String>,
    pub(crate) prefer: Option<PreferReturn>,
    pub(crate) user_metadata: bool,
    pub(crate) body: Option<JsonValue>,
}

impl OperationRequest {
    pub(crate) fn new(url: String, access_token: Option<String>) -> Self {
        Self {
            url,
            access_token,
            ..Self::default()
        }
    }

    pub(crate) fn prefer(mut self, prefer: PreferReturn) -> Self {
        self.prefer = Some(prefer);
        self
    }

    pub(crate) fn user_metadata(mut self, user_metadata: bool) -> Self {
        self.user_metadata = user_metadata;
        self
    }

    pub(crate) fn accept(mut self, accept: String) -> Self {
        self.accept = Some(accept);
        self
    }

    pub(crate) fn body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

impl OperationOptions {
    /// Fail before building an iterator when no token source exists
    pub(crate) fn ensure_access_token(&self, explicit: Option<&str>) -> Result<()> {
        ensure_access_token(explicit, self.access_token_provider.as_ref())
    }

    async fn build_request(&self, method: Method, request: OperationRequest) -> Result<RestRequest> {
        let token = resolve_access_token(
            request.access_token.as_deref(),
            self.access_token_provider.as_ref(),
        )
        .await?;

        let accept = request.accept.unwrap_or_else(|| self.api.accept_header());
        let mut rest = RestRequest::new(method, request.url)
            .header("Authorization", token)
            .header("Accept", accept);

        if let Some(prefer) = request.prefer {
            rest = rest.header("Prefer", prefer.header_value());
        }
        if request.user_metadata {
            rest = rest.header("User-Metadata", "true");
        }
        if let Some(body) = request.body {
            rest = rest.header("Content-Type", "application/json").json(body);
        }

        Ok(rest)
    }

    /// Send a request and decode the response body
    pub(crate) async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        request: OperationRequest,
    ) -> Result<R> {
        let url = request.url.clone();
        let rest = self.build_request(method, request).await?;
        let body = self.rest_client.send(rest).await?;

        serde_json::from_value(body)
            .map_err(|e| Error::decode(format!("Unexpected response from {method} {url}: {e}")))
    }

    /// Send a request whose response body carries nothing of interest
    pub(crate) async fn send_void(&self, method: Method, request: OperationRequest) -> Result<()> {
        let rest = self.build_request(method, request).await?;
        self.rest_client.send(rest).await?;
        Ok(())
    }

    /// Lazy iterator over a paged collection endpoint
    ///
    /// `accessor` pulls the entity array out of each decoded page.
    pub(crate) fn entity_list<R, T>(
        self: &Arc<Self>,
        first_page: OperationRequest,
        accessor: fn(R) -> Vec<T>,
    ) -> EntityListIterator<T>
    where
        R: DeserializeOwned + CollectionResponse + Send + 'static,
        T: Send + 'static,
    {
        EntityListIterator::new(page_query(Arc::clone(self), first_page, accessor))
    }
}

/// Page fetch for one URL; the decoded page links to the fetch for the next URL
fn page_query<R, T>(
    options: Arc<OperationOptions>,
    request: OperationRequest,
    accessor: fn(R) -> Vec<T>,
) -> PageQuery<T>
where
    R: DeserializeOwned + CollectionResponse + Send + 'static,
    T: Send + 'static,
{
    let request = Arc::new(request);
    PageQuery::new(move || {
        let options = Arc::clone(&options);
        let request = Arc::clone(&request);
        async move {
            debug!("Fetching entity page {}", request.url);
            let response: R = options.send(Method::GET, (*request).clone()).await?;

            let next = response.next_link().map(|href| {
                let next_request = OperationRequest {
                    url: href.to_string(),
                    ..(*request).clone()
                };
                page_query(Arc::clone(&options), next_request, accessor)
            });

            Ok(Page {
                entities: accessor(response),
                next,
            })
        }
    })
}
