//! Suppression rule templates

use super::common::{collection_response, CollectionLinks, SuppressionRuleParameters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleTemplate {
    pub id: String,
    pub display_name: String,
    pub description: String,
    /// Prompt shown when filling in the template
    pub prompt: String,
    /// Parameters a rule created from this template must provide
    pub template_expression: SuppressionRuleParameters,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromGetTemplates {
    pub suppression_rule_templates: Vec<SuppressionRuleTemplate>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

collection_response!(ResponseFromGetTemplates);
