//! Suppression rules

use super::common::{
    collection_response, AllUserMetadata, CollectionLinks, Link, SuppressionRuleParameters,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionRuleDetailLink {
    /// Link to the full rule
    pub rule: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleUserInfoLinks {
    pub created_by: Link,
    pub last_modified_by: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleSelfLink {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub created_by: Link,
    pub last_modified_by: Link,
}

/// Rule as returned by `Prefer: return=minimal` listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalSuppressionRule {
    pub id: String,
    pub display_name: String,
    #[serde(rename = "_links")]
    pub links: SuppressionRuleDetailLink,
}

/// Full rule representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleDetails {
    pub id: String,
    pub display_name: String,
    pub reason: String,
    pub creation_date_time: DateTime<Utc>,
    pub modification_date_time: DateTime<Utc>,
    pub template_id: String,
    pub parameters: SuppressionRuleParameters,
    /// Present only when user metadata was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<AllUserMetadata>,
    #[serde(rename = "_links")]
    pub links: SuppressionRuleUserInfoLinks,
}

/// Rule returned by the create operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRule {
    pub id: String,
    pub template_id: String,
    pub display_name: String,
    pub reason: String,
    pub parameters: SuppressionRuleParameters,
    #[serde(rename = "_links")]
    pub links: SuppressionRuleSelfLink,
}

/// Rule returned by the update operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleUpdate {
    pub id: String,
    pub template_id: String,
    pub display_name: String,
    pub reason: String,
    pub parameters: SuppressionRuleParameters,
    pub creation_date_time: DateTime<Utc>,
    pub modification_date_time: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: SuppressionRuleSelfLink,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromGetSuppressionRule {
    pub suppression_rule: SuppressionRuleDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromGetSuppressionRuleListMinimal {
    pub suppression_rules: Vec<MinimalSuppressionRule>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromGetSuppressionRuleList {
    pub suppression_rules: Vec<SuppressionRuleDetails>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

collection_response!(
    ResponseFromGetSuppressionRuleListMinimal,
    ResponseFromGetSuppressionRuleList,
);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromCreateSuppressionRule {
    pub suppression_rule: SuppressionRule,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromUpdateSuppressionRule {
    pub suppression_rule: SuppressionRuleUpdate,
}
