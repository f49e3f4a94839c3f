//! Suppression rule operations

use super::base::{OperationOptions, OperationRequest};
use super::params::{
    CreateSuppressionRuleParams, DeleteSuppressionRuleParams, GetSuppressionRuleListParams,
    GetSuppressionRuleParams, UpdateSuppressionRuleParams,
};
use crate::error::Result;
use crate::models::{
    MinimalSuppressionRule, ResponseFromCreateSuppressionRule, ResponseFromGetSuppressionRule,
    ResponseFromGetSuppressionRuleList, ResponseFromGetSuppressionRuleListMinimal,
    ResponseFromUpdateSuppressionRule, SuppressionRule, SuppressionRuleDetails,
    SuppressionRuleUpdate,
};
use crate::pagination::EntityListIterator;
use crate::types::{Method, PreferReturn};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SuppressionRuleOperations {
    options: Arc<OperationOptions>,
}

impl SuppressionRuleOperations {
    pub(crate) fn new(options: Arc<OperationOptions>) -> Self {
        Self { options }
    }

    /// Lazily iterate rules in their minimal form
    pub fn list_minimal(
        &self,
        params: GetSuppressionRuleListParams,
    ) -> Result<EntityListIterator<MinimalSuppressionRule>> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.rule_list_url(params.url_params.as_ref());
        let request = OperationRequest::new(url, params.access_token).prefer(PreferReturn::Minimal);

        Ok(self.options.entity_list(
            request,
            |page: ResponseFromGetSuppressionRuleListMinimal| page.suppression_rules,
        ))
    }

    /// Lazily iterate full rule representations
    pub fn list_representation(
        &self,
        params: GetSuppressionRuleListParams,
    ) -> Result<EntityListIterator<SuppressionRuleDetails>> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.rule_list_url(params.url_params.as_ref());
        let request = OperationRequest::new(url, params.access_token)
            .prefer(PreferReturn::Representation)
            .user_metadata(params.user_metadata);

        Ok(self.options.entity_list(
            request,
            |page: ResponseFromGetSuppressionRuleList| page.suppression_rules,
        ))
    }

    /// Fetch one rule
    pub async fn get(&self, params: GetSuppressionRuleParams) -> Result<SuppressionRuleDetails> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.single_rule_url(&params.rule_id);
        let request =
            OperationRequest::new(url, params.access_token).user_metadata(params.user_metadata);

        let response: ResponseFromGetSuppressionRule =
            self.options.send(Method::GET, request).await?;
        Ok(response.suppression_rule)
    }

    /// Create a rule from a template
    pub async fn create(&self, params: CreateSuppressionRuleParams) -> Result<SuppressionRule> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let body = json!({
            "templateId": params.template_id,
            "displayName": params.display_name,
            "description": params.reason,
            "parameters": params.parameters,
        });
        let request =
            OperationRequest::new(self.options.urls.create_rule_url(), params.access_token).body(body);

        let response: ResponseFromCreateSuppressionRule =
            self.options.send(Method::POST, request).await?;
        info!("Created suppression rule {}", response.suppression_rule.id);
        Ok(response.suppression_rule)
    }

    /// Change a rule's display name and reason
    pub async fn update(&self, params: UpdateSuppressionRuleParams) -> Result<SuppressionRuleUpdate> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let body = json!({
            "displayName": params.display_name,
            "description": params.reason,
        });
        let url = self.options.urls.single_rule_url(&params.rule_id);
        let request = OperationRequest::new(url, params.access_token).body(body);

        let response: ResponseFromUpdateSuppressionRule =
            self.options.send(Method::PUT, request).await?;
        Ok(response.suppression_rule)
    }

    /// Delete a rule
    pub async fn delete(&self, params: DeleteSuppressionRuleParams) -> Result<()> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.single_rule_url(&params.rule_id);

        self.options
            .send_void(Method::DELETE, OperationRequest::new(url, params.access_token))
            .await?;
        info!("Deleted suppression rule {}", params.rule_id);
        Ok(())
    }
}
