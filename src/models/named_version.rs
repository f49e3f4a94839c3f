//! iModels API named versions, used to pick the default version for a run

use super::common::{collection_response, CollectionLinks};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalNamedVersion {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changeset_id: Option<String>,
    #[serde(default)]
    pub changeset_index: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromGetNamedVersionList {
    pub named_versions: Vec<MinimalNamedVersion>,
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
}

collection_response!(ResponseFromGetNamedVersionList);
