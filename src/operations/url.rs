//! Clash Detection API URLs

use crate::config::ApiOptions;

/// Url parameters supported by project-scoped entity list queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionUrlParams {
    /// Filters entities for a specific project
    pub project_id: String,
    /// Entities per page, at most 1000; the service defaults to 100
    pub top: Option<u32>,
}

impl CollectionUrlParams {
    /// Parameters for a project with the default page size
    pub fn project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            top: None,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("projectId", self.project_id.clone())];
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        pairs
    }
}

/// Url parameters for project-scoped iModel metadata queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUrlParams {
    pub project_id: String,
}

impl ProjectUrlParams {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("projectId", self.project_id.clone())]
    }
}

/// Builds every URL the operation groups call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFormatter {
    base_url: String,
    imodels_base_url: String,
}

impl UrlFormatter {
    /// Create a formatter for the configured endpoints
    pub fn new(api: &ApiOptions) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            imodels_base_url: api.imodels_base_url.trim_end_matches('/').to_string(),
        }
    }

    // ========================================================================
    // Suppression rules
    // ========================================================================

    pub fn single_rule_url(&self, rule_id: &str) -> String {
        format!("{}/suppressionRules/{rule_id}", self.base_url)
    }

    pub fn rule_list_url(&self, params: Option<&CollectionUrlParams>) -> String {
        let query = form_query_string(&params.map(CollectionUrlParams::query_pairs).unwrap_or_default());
        format!("{}/suppressionRules{query}", self.base_url)
    }

    pub fn create_rule_url(&self) -> String {
        format!("{}/suppressionRules", self.base_url)
    }

    // ========================================================================
    // Templates
    // ========================================================================

    pub fn template_list_url(&self, params: Option<&CollectionUrlParams>) -> String {
        let query = form_query_string(&params.map(CollectionUrlParams::query_pairs).unwrap_or_default());
        format!("{}/suppressionRuleTemplates{query}", self.base_url)
    }

    // ========================================================================
    // Tests
    // ========================================================================

    pub fn single_test_url(&self, test_id: &str) -> String {
        format!("{}/tests/{test_id}", self.base_url)
    }

    pub fn test_list_url(&self, params: Option<&CollectionUrlParams>) -> String {
        let query = form_query_string(&params.map(CollectionUrlParams::query_pairs).unwrap_or_default());
        format!("{}/tests{query}", self.base_url)
    }

    pub fn create_test_url(&self) -> String {
        format!("{}/tests", self.base_url)
    }

    // ========================================================================
    // Runs and results
    // ========================================================================

    pub fn single_run_url(&self, run_id: &str) -> String {
        format!("{}/runs/{run_id}", self.base_url)
    }

    pub fn run_list_url(&self, params: Option<&CollectionUrlParams>) -> String {
        let query = form_query_string(&params.map(CollectionUrlParams::query_pairs).unwrap_or_default());
        format!("{}/runs{query}", self.base_url)
    }

    pub fn run_test_url(&self) -> String {
        format!("{}/runs", self.base_url)
    }

    pub fn result_url(&self, result_id: &str) -> String {
        format!("{}/results/{result_id}", self.base_url)
    }

    // ========================================================================
    // iModel metadata
    // ========================================================================

    pub fn schema_info_url(&self, imodel_id: &str, params: Option<&ProjectUrlParams>) -> String {
        let query = form_query_string(&params.map(ProjectUrlParams::query_pairs).unwrap_or_default());
        format!("{}/schemas/imodels/{imodel_id}{query}", self.base_url)
    }

    pub fn extract_schema_info_url(&self, imodel_id: &str) -> String {
        format!("{}/schemas/imodels/{imodel_id}", self.base_url)
    }

    pub fn models_and_categories_url(
        &self,
        imodel_id: &str,
        params: Option<&ProjectUrlParams>,
    ) -> String {
        let query = form_query_string(&params.map(ProjectUrlParams::query_pairs).unwrap_or_default());
        format!("{}/modelsAndCategories/imodels/{imodel_id}{query}", self.base_url)
    }

    pub fn extract_models_and_categories_url(&self, imodel_id: &str) -> String {
        format!("{}/modelsAndCategories/imodels/{imodel_id}", self.base_url)
    }

    /// Newest named version first, one per page
    pub fn latest_named_version_url(&self, imodel_id: &str) -> String {
        format!(
            "{}/{imodel_id}/namedversions?$top=1&$orderBy=changesetIndex%20desc",
            self.imodels_base_url
        )
    }
}

/// `?k=v&k2=v2`, skipping blank values; values are appended verbatim
fn form_query_string(pairs: &[(&str, String)]) -> String {
    let mut query = String::new();
    for (key, value) in pairs {
        if value.trim().is_empty() {
            continue;
        }
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}
