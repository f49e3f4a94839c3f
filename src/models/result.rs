//! Clash detection results

use serde::{Deserialize, Serialize};

/// One detected clash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashDetails {
    /// `Collision`, `Clearance`, `Touching` or `Not Initialized`
    pub clash_type: String,
    /// Clearance in meters for `Clearance` clashes, -1 otherwise
    pub clearance: f64,
    pub element_a_id: String,
    pub element_a_label: String,
    /// Index into [`ResponseFromGetResult::category_list`]
    pub element_a_category_index: usize,
    /// Index into [`ResponseFromGetResult::model_list`]
    pub element_a_model_index: usize,
    pub element_b_id: String,
    pub element_b_label: String,
    pub element_b_category_index: usize,
    pub element_b_model_index: usize,
    pub center: ClashDetectionResultCenter,
    /// Indices into [`ResponseFromGetResult::suppression_rule_list`]
    #[serde(default)]
    pub suppressing_rule_index_array: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClashDetectionResultCenter {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceIdList {
    pub id: String,
    pub display_name: String,
}

/// Results of one clash detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFromGetResult {
    pub result: Vec<ClashDetails>,
    pub model_list: Vec<ReferenceIdList>,
    pub category_list: Vec<ReferenceIdList>,
    #[serde(default)]
    pub suppression_rule_list: Vec<ReferenceIdList>,
}

impl ResponseFromGetResult {
    /// Model referenced by a clash index
    pub fn model(&self, index: usize) -> Option<&ReferenceIdList> {
        self.model_list.get(index)
    }

    /// Category referenced by a clash index
    pub fn category(&self, index: usize) -> Option<&ReferenceIdList> {
        self.category_list.get(index)
    }

    /// Suppression rules that apply to a clash
    pub fn suppressing_rules<'a>(
        &'a self,
        clash: &'a ClashDetails,
    ) -> impl Iterator<Item = &'a ReferenceIdList> + 'a {
        clash
            .suppressing_rule_index_array
            .iter()
            .filter_map(|&i| self.suppression_rule_list.get(i))
    }
}
