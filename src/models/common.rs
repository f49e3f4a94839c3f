//! Shapes shared by several resources

use serde::{Deserialize, Serialize};

/// Link to a related entity or entity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// URL of the related resource
    pub href: String,
}

/// Links included in every entity list page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLinks {
    /// Link to the current page
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    /// Link to the next page; `null` when this is the last page
    #[serde(default)]
    pub next: Option<Link>,
}

/// Any entity list page response
pub trait CollectionResponse {
    /// Pagination links of this page
    fn links(&self) -> &CollectionLinks;

    /// URL of the next page, if any
    fn next_link(&self) -> Option<&str> {
        self.links().next.as_ref().map(|link| link.href.as_str())
    }
}

/// Implements [`CollectionResponse`] for a struct with a `links` field
macro_rules! collection_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::CollectionResponse for $ty {
                fn links(&self) -> &$crate::models::CollectionLinks {
                    &self.links
                }
            }
        )+
    };
}
pub(crate) use collection_response;

/// Creator and last modifier of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllUserMetadata {
    pub created_by: UserMetadata,
    pub modified_by: UserMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub email: String,
    pub name: String,
}

/// Suppression rule function parameters; which ones apply depends on the template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_key: Option<PropertyKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<ValueObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_path: Option<ValueObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec_sql: Option<ValueObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_expression1: Option<ValueObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_expression2: Option<ValueObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_expression: Option<ValueObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_expression1: Option<PropertyExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_expression2: Option<PropertyExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_expression: Option<PropertyExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_key1: Option<ClassKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_key2: Option<ClassKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_key: Option<ClassKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Regex pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObject {
    pub value: String,
}

impl ValueObject {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyExpression {
    pub relationship_path: String,
    pub property_name: String,
    pub operator: String,
    pub property_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassKey {
    pub schema_name: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyKey {
    pub relationship_path: String,
    pub property_name: String,
}

/// Which elements take part on one side of a clash test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSetCriteria {
    pub model_ids: Vec<String>,
    pub category_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
    pub self_check: bool,
    pub clearance: f64,
}

/// Advanced clash test settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    /// No processing time limit, only a result limit
    pub long_clash: bool,
    /// Calculate and report the minimum orthogonal overlap distance
    pub calculate_overlap: bool,
    /// With `suppressTouching` and `calculateOverlap` set, suppress overlaps below the touching tolerance
    pub tolerance_overlap_validation: bool,
}
