//! Clash detection run operations
//!
//! Run listings come back in a single response and are not paged.

use super::base::{OperationOptions, OperationRequest};
use super::params::{DeleteRunParams, GetRunListParams, GetRunParams};
use crate::error::Result;
use crate::models::{
    MinimalRun, ResponseFromGetRun, ResponseFromGetRunList, ResponseFromGetRunListMinimal,
    RunDetails,
};
use crate::types::{Method, PreferReturn};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunOperations {
    options: Arc<OperationOptions>,
}

impl RunOperations {
    pub(crate) fn new(options: Arc<OperationOptions>) -> Self {
        Self { options }
    }

    /// Runs of a project, minimal form
    pub async fn list_minimal(&self, params: GetRunListParams) -> Result<Vec<MinimalRun>> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.run_list_url(params.url_params.as_ref());
        let request = OperationRequest::new(url, params.access_token).prefer(PreferReturn::Minimal);

        let response: ResponseFromGetRunListMinimal =
            self.options.send(Method::GET, request).await?;
        Ok(response.runs)
    }

    /// Runs of a project, full form
    pub async fn list_representation(&self, params: GetRunListParams) -> Result<Vec<RunDetails>> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.run_list_url(params.url_params.as_ref());
        let request =
            OperationRequest::new(url, params.access_token).prefer(PreferReturn::Representation);

        let response: ResponseFromGetRunList = self.options.send(Method::GET, request).await?;
        Ok(response.runs)
    }

    /// Fetch one run
    pub async fn get(&self, params: GetRunParams) -> Result<RunDetails> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.single_run_url(&params.run_id);

        let response: ResponseFromGetRun = self
            .options
            .send(Method::GET, OperationRequest::new(url, params.access_token))
            .await?;
        Ok(response.run)
    }

    /// Delete a run and its result
    pub async fn delete(&self, params: DeleteRunParams) -> Result<()> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.single_run_url(&params.run_id);

        self.options
            .send_void(Method::DELETE, OperationRequest::new(url, params.access_token))
            .await?;
        info!("Deleted run {}", params.run_id);
        Ok(())
    }
}
