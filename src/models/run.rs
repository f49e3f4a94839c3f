//! Clash detection runs

use super::common::{AllUserMetadata, Link};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Run as returned by `Prefer: return=minimal` listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalRun {
    pub id: String,
    pub display_name: String,
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, Link>,
}

/// Full run representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDetails {
    pub id: String,
    pub display_name: String,
    /// Kept as sent; the service does not always include a UTC offset
    pub executed_date_time: String,
    /// Number of clashes found
    pub count: String,
    /// Run status, e.g. `queued`, `running`, `completed`, `failed`
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_view_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<AllUserMetadata>,
    /// Related resources such as `test`, `result` and `executedBy`
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, Link>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseFromGetRun {
    pub run: RunDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseFromGetRunListMinimal {
    pub runs: Vec<MinimalRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseFromGetRunList {
    pub runs: Vec<RunDetails>,
}
