//! Clash detection result operations

use super::base::{OperationOptions, OperationRequest};
use super::params::GetResultParams;
use crate::error::Result;
use crate::models::ResponseFromGetResult;
use crate::types::Method;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ResultOperations {
    options: Arc<OperationOptions>,
}

impl ResultOperations {
    pub(crate) fn new(options: Arc<OperationOptions>) -> Self {
        Self { options }
    }

    /// Fetch the clashes of a completed run
    pub async fn get(&self, params: GetResultParams) -> Result<ResponseFromGetResult> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.result_url(&params.result_id);

        self.options
            .send(Method::GET, OperationRequest::new(url, params.access_token))
            .await
    }
}
