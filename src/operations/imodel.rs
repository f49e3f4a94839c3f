//! iModel schema and model/category metadata operations
//!
//! Extraction requests only queue work on the service; poll the matching
//! getter until its status reads `available`.

use super::base::{OperationOptions, OperationRequest};
use super::params::{ExtractIModelMetadataParams, GetIModelMetadataParams};
use crate::error::Result;
use crate::models::{
    ModelsAndCategories, ResponseFromGetModelsAndCategories, ResponseFromGetSchemaInfo, SchemaInfo,
};
use crate::types::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct IModelOperations {
    options: Arc<OperationOptions>,
}

impl IModelOperations {
    pub(crate) fn new(options: Arc<OperationOptions>) -> Self {
        Self { options }
    }

    /// Schema info extracted from an iModel
    pub async fn get_schema_info(&self, params: GetIModelMetadataParams) -> Result<SchemaInfo> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self
            .options
            .urls
            .schema_info_url(&params.imodel_id, params.url_params.as_ref());

        let response: ResponseFromGetSchemaInfo = self
            .options
            .send(Method::GET, OperationRequest::new(url, params.access_token))
            .await?;
        Ok(response.schema_info)
    }

    /// Ask the service to extract an iModel's schema info
    pub async fn extract_schema_info(&self, params: ExtractIModelMetadataParams) -> Result<()> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.extract_schema_info_url(&params.imodel_id);
        let request = OperationRequest::new(url, params.access_token)
            .body(json!({ "projectId": params.project_id }));

        self.options.send_void(Method::POST, request).await?;
        info!("Requested schema extraction for iModel {}", params.imodel_id);
        Ok(())
    }

    /// Models and categories extracted from an iModel
    pub async fn get_models_and_categories(
        &self,
        params: GetIModelMetadataParams,
    ) -> Result<ModelsAndCategories> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self
            .options
            .urls
            .models_and_categories_url(&params.imodel_id, params.url_params.as_ref());

        let response: ResponseFromGetModelsAndCategories = self
            .options
            .send(Method::GET, OperationRequest::new(url, params.access_token))
            .await?;
        Ok(response.models_and_categories)
    }

    /// Ask the service to extract an iModel's models and categories
    pub async fn extract_models_and_categories(
        &self,
        params: ExtractIModelMetadataParams,
    ) -> Result<()> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self
            .options
            .urls
            .extract_models_and_categories_url(&params.imodel_id);
        let request = OperationRequest::new(url, params.access_token)
            .body(json!({ "projectId": params.project_id }));

        self.options.send_void(Method::POST, request).await?;
        info!(
            "Requested models and categories extraction for iModel {}",
            params.imodel_id
        );
        Ok(())
    }
}
