//! Suppression rule template operations

use super::base::{OperationOptions, OperationRequest};
use super::params::GetTemplateListParams;
use crate::error::Result;
use crate::models::{ResponseFromGetTemplates, SuppressionRuleTemplate};
use crate::pagination::EntityListIterator;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TemplateOperations {
    options: Arc<OperationOptions>,
}

impl TemplateOperations {
    pub(crate) fn new(options: Arc<OperationOptions>) -> Self {
        Self { options }
    }

    /// Lazily iterate all templates
    pub fn list(
        &self,
        params: GetTemplateListParams,
    ) -> Result<EntityListIterator<SuppressionRuleTemplate>> {
        self.options.ensure_access_token(params.access_token.as_deref())?;
        let url = self.options.urls.template_list_url(params.url_params.as_ref());

        Ok(self.options.entity_list(
            OperationRequest::new(url, params.access_token),
            |page: ResponseFromGetTemplates| page.suppression_rule_templates,
        ))
    }
}
