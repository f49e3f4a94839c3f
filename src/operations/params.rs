//! Operation parameters
//!
//! Every operation accepts an optional explicit access token; when it is
//! `None` the client's [`AccessTokenProvider`](crate::auth::AccessTokenProvider)
//! is asked instead.

use super::url::{CollectionUrlParams, ProjectUrlParams};
use crate::models::{AdvancedSettings, ElementSetCriteria, SuppressionRuleParameters};
use serde::Serialize;

// ============================================================================
// Templates
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct GetTemplateListParams {
    pub access_token: Option<String>,
    /// Narrows down the listing
    pub url_params: Option<CollectionUrlParams>,
}

// ============================================================================
// Suppression rules
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct GetSuppressionRuleListParams {
    pub access_token: Option<String>,
    pub url_params: Option<CollectionUrlParams>,
    /// Request creator and modifier details; representation listings only
    pub user_metadata: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GetSuppressionRuleParams {
    pub access_token: Option<String>,
    pub rule_id: String,
    pub user_metadata: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteSuppressionRuleParams {
    pub access_token: Option<String>,
    pub rule_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateSuppressionRuleParams {
    pub access_token: Option<String>,
    pub template_id: String,
    pub display_name: String,
    /// Why matching clashes are suppressed
    pub reason: String,
    pub parameters: SuppressionRuleParameters,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSuppressionRuleParams {
    pub access_token: Option<String>,
    pub rule_id: String,
    pub display_name: String,
    pub reason: String,
}

// ============================================================================
// Tests
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct GetTestListParams {
    pub access_token: Option<String>,
    pub url_params: Option<CollectionUrlParams>,
    pub user_metadata: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GetTestParams {
    pub access_token: Option<String>,
    pub test_id: String,
    pub user_metadata: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTestParams {
    pub access_token: Option<String>,
    pub test_id: String,
}

/// Test definition sent by create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDefinition {
    pub display_name: String,
    pub description: String,
    pub set_a: ElementSetCriteria,
    pub set_b: ElementSetCriteria,
    pub suppress_touching: bool,
    pub touching_tolerance: f64,
    pub include_sub_models: bool,
    /// Ids of the suppression rules to apply
    pub suppression_rules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<AdvancedSettings>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTestParams {
    pub access_token: Option<String>,
    /// Project the test belongs to
    pub project_id: String,
    pub test: TestDefinition,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTestParams {
    pub access_token: Option<String>,
    pub test_id: String,
    pub test: TestDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSettings {
    pub results_limit: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunTestParams {
    pub access_token: Option<String>,
    pub test_id: String,
    pub imodel_id: String,
    /// Latest named version of the iModel when `None`
    pub named_version_id: Option<String>,
    pub test_settings: Option<TestSettings>,
}

// ============================================================================
// Runs and results
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct GetRunListParams {
    pub access_token: Option<String>,
    pub url_params: Option<CollectionUrlParams>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRunParams {
    pub access_token: Option<String>,
    pub run_id: String,
}

pub type DeleteRunParams = GetRunParams;

#[derive(Debug, Clone, Default)]
pub struct GetResultParams {
    pub access_token: Option<String>,
    pub result_id: String,
}

// ============================================================================
// iModel metadata
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct GetIModelMetadataParams {
    pub access_token: Option<String>,
    pub imodel_id: String,
    pub url_params: Option<ProjectUrlParams>,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractIModelMetadataParams {
    pub access_token: Option<String>,
    pub imodel_id: String,
    pub project_id: String,
}
